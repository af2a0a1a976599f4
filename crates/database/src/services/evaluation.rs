use super::require_row;
use crate::{
    entities::{course_evaluations, learning_objectives, sections},
    error::StoreError,
};
use log::info;
use models::records::EvaluationInput;
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, TransactionTrait, sea_query::OnConflict,
};

pub struct EvaluationService;

impl EvaluationService {
    /// Records the evaluation of a section, replacing any earlier one
    pub async fn upsert_evaluation(
        db: &DatabaseConnection,
        evaluation: EvaluationInput,
    ) -> Result<(), StoreError> {
        evaluation.validate()?;

        let txn = db.begin().await?;

        require_row::<sections::Entity, _, _>(
            &txn,
            evaluation.section_id,
            "course_evaluations",
            "section_id",
            evaluation.section_id,
        )
        .await?;
        require_row::<learning_objectives::Entity, _, _>(
            &txn,
            evaluation.objective_code,
            "course_evaluations",
            "objective_code",
            evaluation.objective_code,
        )
        .await?;

        let section_id = evaluation.section_id;
        course_evaluations::Entity::insert(course_evaluations::ActiveModel {
            section_id: Set(evaluation.section_id),
            objective_code: Set(evaluation.objective_code),
            eval_criteria: Set(evaluation.eval_criteria),
            eval_a_count: Set(evaluation.eval_a_count),
            eval_b_count: Set(evaluation.eval_b_count),
            eval_c_count: Set(evaluation.eval_c_count),
            eval_f_count: Set(evaluation.eval_f_count),
            improvements: Set(evaluation.improvements),
        })
        .on_conflict(
            OnConflict::column(course_evaluations::Column::SectionId)
                .update_columns([
                    course_evaluations::Column::ObjectiveCode,
                    course_evaluations::Column::EvalCriteria,
                    course_evaluations::Column::EvalACount,
                    course_evaluations::Column::EvalBCount,
                    course_evaluations::Column::EvalCCount,
                    course_evaluations::Column::EvalFCount,
                    course_evaluations::Column::Improvements,
                ])
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await
        .map_err(StoreError::on("course_evaluations"))?;

        txn.commit().await?;

        info!("Recorded evaluation for section {section_id}");
        Ok(())
    }

    pub async fn get_evaluation(
        db: &DatabaseConnection,
        section_id: i32,
    ) -> Result<Option<course_evaluations::Model>, StoreError> {
        Ok(course_evaluations::Entity::find_by_id(section_id)
            .one(db)
            .await?)
    }
}
