use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create degrees table, keyed by (name, level)
        manager
            .create_table(
                Table::create()
                    .table(Degrees::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Degrees::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Degrees::Level).string_len(255).not_null())
                    .primary_key(Index::create().col(Degrees::Name).col(Degrees::Level))
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::CourseNumber)
                            .string_len(16)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::Name)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::DepartmentCode)
                            .string_len(4)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Courses::CourseCode)
                            .integer()
                            .not_null()
                            .check(Expr::col(Courses::CourseCode).between(1000, 9999)),
                    )
                    .to_owned(),
            )
            .await?;

        // Create instructors table
        manager
            .create_table(
                Table::create()
                    .table(Instructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Instructors::InstructorId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Instructors::Name).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        // Create semesters table, keyed by (year, semester)
        manager
            .create_table(
                Table::create()
                    .table(Semesters::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Semesters::Year).integer().not_null())
                    .col(
                        ColumnDef::new(Semesters::Semester)
                            .string_len(16)
                            .not_null()
                            .check(
                                Expr::col(Semesters::Semester)
                                    .is_in(["Winter", "Spring", "Summer", "Fall"]),
                            ),
                    )
                    .primary_key(
                        Index::create()
                            .col(Semesters::Year)
                            .col(Semesters::Semester),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sections table
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sections::SectionNumber)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Sections::NumberOfStudents)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Sections::NumberOfStudents).gte(0)),
                    )
                    .col(ColumnDef::new(Sections::InstructorId).integer().not_null())
                    .col(
                        ColumnDef::new(Sections::CourseNumber)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sections::Year).integer().not_null())
                    .col(ColumnDef::new(Sections::Semester).string_len(16).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-instructor_id")
                            .from(Sections::Table, Sections::InstructorId)
                            .to(Instructors::Table, Instructors::InstructorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-course_number")
                            .from(Sections::Table, Sections::CourseNumber)
                            .to(Courses::Table, Courses::CourseNumber),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-year_semester")
                            .from(Sections::Table, (Sections::Year, Sections::Semester))
                            .to(Semesters::Table, (Semesters::Year, Semesters::Semester)),
                    )
                    .to_owned(),
            )
            .await?;

        // Create learning_objectives table
        manager
            .create_table(
                Table::create()
                    .table(LearningObjectives::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LearningObjectives::Code)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LearningObjectives::Title)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(LearningObjectives::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Create degree_courses junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(DegreeCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DegreeCourses::DegreeName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DegreeCourses::DegreeLevel)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DegreeCourses::CourseNumber)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DegreeCourses::CoreCourse)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .primary_key(
                        Index::create()
                            .col(DegreeCourses::DegreeName)
                            .col(DegreeCourses::DegreeLevel)
                            .col(DegreeCourses::CourseNumber),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-degree_courses-degree")
                            .from(
                                DegreeCourses::Table,
                                (DegreeCourses::DegreeName, DegreeCourses::DegreeLevel),
                            )
                            .to(Degrees::Table, (Degrees::Name, Degrees::Level))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-degree_courses-course_number")
                            .from(DegreeCourses::Table, DegreeCourses::CourseNumber)
                            .to(Courses::Table, Courses::CourseNumber)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_learning_objectives junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseLearningObjectives::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseLearningObjectives::CourseNumber)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseLearningObjectives::ObjectiveCode)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CourseLearningObjectives::CourseNumber)
                            .col(CourseLearningObjectives::ObjectiveCode),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_learning_objectives-course_number")
                            .from(
                                CourseLearningObjectives::Table,
                                CourseLearningObjectives::CourseNumber,
                            )
                            .to(Courses::Table, Courses::CourseNumber)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_learning_objectives-objective_code")
                            .from(
                                CourseLearningObjectives::Table,
                                CourseLearningObjectives::ObjectiveCode,
                            )
                            .to(LearningObjectives::Table, LearningObjectives::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sections_courses table, a time-scoped course assignment
        manager
            .create_table(
                Table::create()
                    .table(SectionsCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SectionsCourses::CourseNumber)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SectionsCourses::SectionNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SectionsCourses::SemesterYear)
                            .string_len(32)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SectionsCourses::CourseNumber)
                            .col(SectionsCourses::SectionNumber)
                            .col(SectionsCourses::SemesterYear),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections_courses-course_number")
                            .from(SectionsCourses::Table, SectionsCourses::CourseNumber)
                            .to(Courses::Table, Courses::CourseNumber)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections_courses-section_number")
                            .from(SectionsCourses::Table, SectionsCourses::SectionNumber)
                            .to(Sections::Table, Sections::SectionNumber)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_evaluations table; the section is the key, so a
        // section carries at most one evaluation
        manager
            .create_table(
                Table::create()
                    .table(CourseEvaluations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseEvaluations::SectionId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseEvaluations::ObjectiveCode)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseEvaluations::EvalCriteria)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(grade_count(CourseEvaluations::EvalACount))
                    .col(grade_count(CourseEvaluations::EvalBCount))
                    .col(grade_count(CourseEvaluations::EvalCCount))
                    .col(grade_count(CourseEvaluations::EvalFCount))
                    .col(ColumnDef::new(CourseEvaluations::Improvements).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_evaluations-section_id")
                            .from(CourseEvaluations::Table, CourseEvaluations::SectionId)
                            .to(Sections::Table, Sections::SectionNumber)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_evaluations-objective_code")
                            .from(CourseEvaluations::Table, CourseEvaluations::ObjectiveCode)
                            .to(LearningObjectives::Table, LearningObjectives::Code),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(CourseEvaluations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SectionsCourses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseLearningObjectives::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DegreeCourses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(LearningObjectives::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Semesters::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Instructors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Degrees::Table).to_owned())
            .await?;

        Ok(())
    }
}

fn grade_count(column: CourseEvaluations) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .default(0)
        .check(Expr::col(column).gte(0))
        .to_owned()
}

#[derive(Iden)]
enum Degrees {
    Table,
    Name,
    Level,
}

#[derive(Iden)]
enum Courses {
    Table,
    CourseNumber,
    Name,
    DepartmentCode,
    CourseCode,
}

#[derive(Iden)]
enum Instructors {
    Table,
    InstructorId,
    Name,
}

#[derive(Iden)]
enum Semesters {
    Table,
    Year,
    Semester,
}

#[derive(Iden)]
enum Sections {
    Table,
    SectionNumber,
    NumberOfStudents,
    InstructorId,
    CourseNumber,
    Year,
    Semester,
}

#[derive(Iden)]
enum LearningObjectives {
    Table,
    Code,
    Title,
    Description,
}

#[derive(Iden)]
enum DegreeCourses {
    Table,
    DegreeName,
    DegreeLevel,
    CourseNumber,
    CoreCourse,
}

#[derive(Iden)]
enum CourseLearningObjectives {
    Table,
    CourseNumber,
    ObjectiveCode,
}

#[derive(Iden)]
enum SectionsCourses {
    Table,
    CourseNumber,
    SectionNumber,
    SemesterYear,
}

#[derive(Iden, Clone, Copy)]
enum CourseEvaluations {
    Table,
    SectionId,
    ObjectiveCode,
    EvalCriteria,
    EvalACount,
    EvalBCount,
    EvalCCount,
    EvalFCount,
    Improvements,
}
