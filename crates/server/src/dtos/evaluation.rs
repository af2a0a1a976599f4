use database::entities::course_evaluations;
use serde::Serialize;
use utoipa::ToSchema;

/// A stored evaluation, using the same field names as the update payload
#[derive(Debug, Serialize, ToSchema)]
pub struct EvaluationResponse {
    #[serde(rename = "section_ID")]
    pub section_id: i32,
    pub objective_code: i32,
    pub eval_criteria: String,
    #[serde(rename = "eval_A_count")]
    pub eval_a_count: i32,
    #[serde(rename = "eval_B_count")]
    pub eval_b_count: i32,
    #[serde(rename = "eval_C_count")]
    pub eval_c_count: i32,
    #[serde(rename = "eval_F_count")]
    pub eval_f_count: i32,
    pub improvements: String,
}

impl From<course_evaluations::Model> for EvaluationResponse {
    fn from(evaluation: course_evaluations::Model) -> Self {
        Self {
            section_id: evaluation.section_id,
            objective_code: evaluation.objective_code,
            eval_criteria: evaluation.eval_criteria,
            eval_a_count: evaluation.eval_a_count,
            eval_b_count: evaluation.eval_b_count,
            eval_c_count: evaluation.eval_c_count,
            eval_f_count: evaluation.eval_f_count,
            improvements: evaluation.improvements,
        }
    }
}
