//! Course distance registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

/// Distances used by the league's home and invitational courses.
const LEAGUE_COURSES: &[(&str, f64)] = &[
    ("McClennan", 3.1),
    ("Winchester", 3.08),
    ("Wilmington", 3.1),
    ("Twilight", 3.06),
    ("Baystate", 3.1),
    ("Burlington", 3.05),
    ("Stoneham", 3.1),
    ("Watertown", 3.1),
    ("Lexington", 3.1),
    ("Devens", 3.1),
    ("Melrose", 3.1),
    ("Reading", 3.1),
    ("Belmont", 3.0),
    ("Woburn", 3.0),
    ("Catholic Memorial", 3.1),
];

/// Mapping from course identifier to distance in miles.
///
/// The registry is owned by the caller and passed into every computation
/// that needs a distance. Every stored distance is finite and positive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct CourseRegistry {
    distances: BTreeMap<String, f64>,
}

impl CourseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the league's courses.
    pub fn league_default() -> Self {
        let distances = LEAGUE_COURSES
            .iter()
            .map(|(course, miles)| ((*course).to_string(), *miles))
            .collect();
        Self { distances }
    }

    /// Sets a course distance, returning the previous value if any.
    pub fn set_distance(&mut self, course: impl Into<String>, miles: f64) -> Result<Option<f64>> {
        let course = course.into();
        if !miles.is_finite() || miles <= 0.0 {
            return Err(ScoringError::InvalidDistance { course, miles });
        }
        Ok(self.distances.insert(course, miles))
    }

    /// Looks up a course distance.
    pub fn distance(&self, course: &str) -> Result<f64> {
        self.distances
            .get(course)
            .copied()
            .ok_or_else(|| ScoringError::UnknownCourse {
                course: course.to_string(),
            })
    }

    /// Copies every distance from `other`, replacing courses of the same name.
    pub fn overlay(&mut self, other: &CourseRegistry) {
        self.distances
            .extend(other.distances.iter().map(|(course, miles)| (course.clone(), *miles)));
    }

    pub fn contains(&self, course: &str) -> bool {
        self.distances.contains_key(course)
    }

    /// Courses in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.distances
            .iter()
            .map(|(course, miles)| (course.as_str(), *miles))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl TryFrom<BTreeMap<String, f64>> for CourseRegistry {
    type Error = ScoringError;

    fn try_from(value: BTreeMap<String, f64>) -> Result<Self> {
        let mut registry = Self::new();
        for (course, miles) in value {
            registry.set_distance(course, miles)?;
        }
        Ok(registry)
    }
}

impl From<CourseRegistry> for BTreeMap<String, f64> {
    fn from(value: CourseRegistry) -> Self {
        value.distances
    }
}
