//! Post-ranking adjustments given on the command line.
//!
//! `--distance NAME=MILES` replaces a course distance before scoring and
//! `--move up:N` / `--move down:N` nudges the runner at place `N` after
//! ranking. Moves apply in the order given, each against the order left by
//! the previous one.

use xc_core::{Direction, MeetResults};
use xc_model::CourseRegistry;

/// `NAME=MILES`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceOverride {
    pub course: String,
    pub miles: f64,
}

/// `up:N` or `down:N`, where `N` is a 1-based place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceMove {
    pub direction: Direction,
    pub place: usize,
}

impl PlaceMove {
    /// 0-based row index of the moved runner.
    pub fn index(&self) -> usize {
        self.place - 1
    }
}

pub fn parse_distance(text: &str) -> Result<DistanceOverride, String> {
    let (course, miles) = text
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=MILES, got `{text}`"))?;
    let course = course.trim();
    if course.is_empty() {
        return Err(format!("missing course name in `{text}`"));
    }
    let miles: f64 = miles
        .trim()
        .parse()
        .map_err(|_| format!("invalid distance `{}`", miles.trim()))?;
    Ok(DistanceOverride {
        course: course.to_string(),
        miles,
    })
}

pub fn parse_move(text: &str) -> Result<PlaceMove, String> {
    let (direction, place) = text
        .split_once(':')
        .ok_or_else(|| format!("expected up:N or down:N, got `{text}`"))?;
    let direction = match direction.trim().to_ascii_lowercase().as_str() {
        "up" => Direction::Up,
        "down" => Direction::Down,
        other => return Err(format!("unknown direction `{other}`")),
    };
    let place: usize = place
        .trim()
        .parse()
        .map_err(|_| format!("invalid place `{}`", place.trim()))?;
    if place == 0 {
        return Err("places start at 1".to_string());
    }
    Ok(PlaceMove { direction, place })
}

/// `--scorers`: a positive count.
pub fn parse_scorers(text: &str) -> Result<usize, String> {
    match text.trim().parse::<usize>() {
        Ok(0) => Err("a team needs at least 1 scorer".to_string()),
        Ok(scorers) => Ok(scorers),
        Err(_) => Err(format!("invalid scorer count `{}`", text.trim())),
    }
}

/// Applies distance overrides on top of `registry`.
pub fn apply_distances(
    registry: &mut CourseRegistry,
    overrides: &[DistanceOverride],
) -> xc_model::Result<()> {
    for item in overrides {
        registry.set_distance(item.course.as_str(), item.miles)?;
    }
    Ok(())
}

/// Applies moves in order and returns how many changed the order.
pub fn apply_moves(results: &mut MeetResults, moves: &[PlaceMove]) -> xc_model::Result<usize> {
    let mut moved = 0;
    for item in moves {
        let changed = match item.direction {
            Direction::Up => results.move_up(item.index())?,
            Direction::Down => results.move_down(item.index())?,
        };
        if changed {
            moved += 1;
        } else {
            tracing::debug!(place = item.place, direction = ?item.direction, "move at boundary ignored");
        }
    }
    Ok(moved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_distance() {
        assert_eq!(
            parse_distance("Franklin Park = 3.1").unwrap(),
            DistanceOverride {
                course: "Franklin Park".to_string(),
                miles: 3.1,
            }
        );
        assert!(parse_distance("Winchester").is_err());
        assert!(parse_distance("=3.1").is_err());
        assert!(parse_distance("Winchester=far").is_err());
    }

    #[test]
    fn parses_move() {
        assert_eq!(
            parse_move("down:1").unwrap(),
            PlaceMove {
                direction: Direction::Down,
                place: 1,
            }
        );
        assert_eq!(parse_move("UP:12").unwrap().index(), 11);
        assert!(parse_move("up:0").is_err());
        assert!(parse_move("sideways:2").is_err());
        assert!(parse_move("up").is_err());
    }

    #[test]
    fn parses_scorers() {
        assert_eq!(parse_scorers("7").unwrap(), 7);
        assert!(parse_scorers("0").is_err());
        assert!(parse_scorers("-1").is_err());
        assert!(parse_scorers("five").is_err());
    }

    #[test]
    fn rejects_non_positive_distance() {
        let mut registry = CourseRegistry::new();
        let overrides = [parse_distance("Devens=0").unwrap()];
        assert!(apply_distances(&mut registry, &overrides).is_err());
        assert!(registry.is_empty());
    }
}
