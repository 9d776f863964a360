//! Gradebook reshaping
//!
//! Upstream splits a student's grades across two resources: the gradebook
//! columns of a course and the grades the current user holds in those
//! columns. [`merge_grades`] joins them into one [`GradeEntry`] per column.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use super::id_string;
use crate::constants::CALCULATED_GRADING_TYPE;

/// One gradebook column merged with the current user's grade for it.
///
/// Values are copied from upstream unchanged (an integer score stays an
/// integer, an HTML feedback object stays an object). Fields the user has no
/// grade for are `None` and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeEntry {
    pub name: Option<Value>,
    pub score: Option<Value>,
    pub text: Option<Value>,
    pub notes: Option<Value>,
    pub feedback: Option<Value>,
}

impl GradeEntry {
    fn from_column(column: &Value, grade: Option<&Value>) -> Self {
        let grade_field = |key: &str| grade.and_then(|g| g.get(key)).cloned();

        Self {
            name: column.get("name").cloned(),
            score: grade_field("score"),
            text: grade_field("text"),
            notes: grade_field("notes"),
            feedback: grade_field("feedback"),
        }
    }
}

/// Join gradebook columns with the user's grades, keeping column order.
///
/// Grades are matched on `columnId` against the column `id`. Grades without a
/// `columnId` are ignored; if several share one, the last wins.
pub fn merge_grades(columns: &[Value], grades: &[Value]) -> Vec<GradeEntry> {
    let by_column: HashMap<String, &Value> = grades
        .iter()
        .filter_map(|grade| grade.get("columnId").and_then(id_string).map(|id| (id, grade)))
        .collect();

    columns
        .iter()
        .map(|column| {
            let grade =
                column.get("id").and_then(id_string).and_then(|id| by_column.get(&id).copied());
            GradeEntry::from_column(column, grade)
        })
        .collect()
}

/// Drop calculated columns (totals, weighted averages), keeping assignments.
///
/// Columns without a `grading.type` are kept.
pub fn filter_assignments(columns: Vec<Value>) -> Vec<Value> {
    columns.into_iter().filter(|column| !is_calculated(column)).collect()
}

fn is_calculated(column: &Value) -> bool {
    column
        .get("grading")
        .and_then(|grading| grading.get("type"))
        .and_then(Value::as_str)
        .is_some_and(|kind| kind == CALCULATED_GRADING_TYPE)
}
