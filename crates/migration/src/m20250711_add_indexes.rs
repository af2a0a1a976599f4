use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Indexes on sections for instructor, course and term scans
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sections_instructor_id")
                    .table(Sections::Table)
                    .col(Sections::InstructorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sections_course_number")
                    .table(Sections::Table)
                    .col(Sections::CourseNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sections_year_semester")
                    .table(Sections::Table)
                    .col(Sections::Year)
                    .col(Sections::Semester)
                    .to_owned(),
            )
            .await?;

        // Reverse lookups on the junction tables
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_degree_courses_course_number")
                    .table(DegreeCourses::Table)
                    .col(DegreeCourses::CourseNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_learning_objectives_objective_code")
                    .table(CourseLearningObjectives::Table)
                    .col(CourseLearningObjectives::ObjectiveCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_evaluations_objective_code")
                    .table(CourseEvaluations::Table)
                    .col(CourseEvaluations::ObjectiveCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_evaluations_objective_code")
                    .table(CourseEvaluations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_learning_objectives_objective_code")
                    .table(CourseLearningObjectives::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_degree_courses_course_number")
                    .table(DegreeCourses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_sections_year_semester")
                    .table(Sections::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_sections_course_number")
                    .table(Sections::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_sections_instructor_id")
                    .table(Sections::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Sections {
    Table,
    InstructorId,
    CourseNumber,
    Year,
    Semester,
}

#[derive(Iden)]
enum DegreeCourses {
    Table,
    CourseNumber,
}

#[derive(Iden)]
enum CourseLearningObjectives {
    Table,
    ObjectiveCode,
}

#[derive(Iden)]
enum CourseEvaluations {
    Table,
    ObjectiveCode,
}
