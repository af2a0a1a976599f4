pub mod course_evaluations;
pub mod course_learning_objectives;
pub mod courses;
pub mod degree_courses;
pub mod degrees;
pub mod instructors;
pub mod learning_objectives;
pub mod sections;
pub mod sections_courses;
pub mod semesters;
