//! Grade models.

use std::collections::HashMap;

use serde::Serialize;
use sqlx::FromRow;

/// One row of `student LEFT JOIN grade LEFT JOIN module`.
///
/// `module_name` and `grade` are `None` for students without grades.
#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct GradeRow {
    pub student_name: String,
    pub module_name: Option<String>,
    pub grade: Option<i32>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GradeEntry {
    pub module_name: String,
    pub grade: i32,
}

/// One student's grades, lowest grade first.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StudentGrades {
    pub student_name: String,
    pub grades: Vec<GradeEntry>,
}

/// Students in the order the store returned them.
pub type GradesByStudent = Vec<StudentGrades>;

/// Groups joined rows by student name.
///
/// Students keep the position of their first row, so the store's collation
/// decides the page order. Every student name gets an entry, even when all
/// its rows lack a module or a grade; those rows contribute no grade.
pub fn group_grades<I>(rows: I) -> GradesByStudent
where
    I: IntoIterator<Item = GradeRow>,
{
    let mut grouped = GradesByStudent::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let index = *positions.entry(row.student_name.clone()).or_insert_with(|| {
            grouped.push(StudentGrades {
                student_name: row.student_name.clone(),
                grades: Vec::new(),
            });
            grouped.len() - 1
        });

        if let (Some(module_name), Some(grade)) = (row.module_name, row.grade) {
            grouped[index].grades.push(GradeEntry { module_name, grade });
        }
    }

    for student in &mut grouped {
        student.grades.sort_by_key(|entry| entry.grade);
    }

    grouped
}

/// Grades of the named student, if present.
pub fn grades_for<'a>(
    grouped: &'a [StudentGrades],
    student_name: &str,
) -> Option<&'a [GradeEntry]> {
    grouped
        .iter()
        .find(|student| student.student_name == student_name)
        .map(|student| student.grades.as_slice())
}
