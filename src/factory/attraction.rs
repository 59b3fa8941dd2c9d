use indexmap::IndexMap;
use serde::Serialize;

use crate::choice::{self, choice};
use crate::error::Result;

choice! {
    pub enum AttractionKind as "attraction" {
        Rollercoaster => ("rollercoaster", "Roller Coaster"),
        Hauntedhouse => ("hauntedhouse", "Haunted House"),
        Waterslide => ("waterslide", "Water Slide"),
    }
}

pub trait Attraction {
    fn name(&self) -> &'static str;
    /// Requirement score for entry.
    fn requirement(&self) -> u32;
    /// Posted rules, in display order.
    fn notes(&self) -> IndexMap<&'static str, &'static str>;
}

pub struct RollerCoaster;
pub struct HauntedHouse;
pub struct WaterSlide;

impl Attraction for RollerCoaster {
    fn name(&self) -> &'static str { "Roller Coaster" }
    fn requirement(&self) -> u32 { 20 }
    fn notes(&self) -> IndexMap<&'static str, &'static str> {
        IndexMap::from([
            ("height", "Must be at least 48 inches tall"),
            ("health", "No heart conditions or recent surgeries"),
        ])
    }
}

impl Attraction for HauntedHouse {
    fn name(&self) -> &'static str { "Haunted House" }
    fn requirement(&self) -> u32 { 50 }
    fn notes(&self) -> IndexMap<&'static str, &'static str> {
        IndexMap::from([
            ("age", "Must be at least 12 years old"),
            ("warning", "Not recommended for individuals with heart conditions"),
        ])
    }
}

impl Attraction for WaterSlide {
    fn name(&self) -> &'static str { "Water Slide" }
    fn requirement(&self) -> u32 { 75 }
    fn notes(&self) -> IndexMap<&'static str, &'static str> {
        IndexMap::from([
            ("swimming", "Must be able to swim"),
            ("lockers", "Locker rental available for personal items"),
        ])
    }
}

/// Serializable snapshot of an attraction for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct AttractionSheet {
    pub kind: AttractionKind,
    pub name: &'static str,
    pub requirement: u32,
    pub notes: IndexMap<&'static str, &'static str>,
}

pub struct AttractionFactory;

impl AttractionFactory {
    /// Total over [`AttractionKind`].
    pub fn create(kind: AttractionKind) -> Box<dyn Attraction> {
        match kind {
            AttractionKind::Rollercoaster => Box::new(RollerCoaster),
            AttractionKind::Hauntedhouse => Box::new(HauntedHouse),
            AttractionKind::Waterslide => Box::new(WaterSlide),
        }
    }

    /// String lookup; unknown names are an error, never a default attraction.
    ///
    /// Matching is lenient: case is ignored, `_`/`-`/space are interchangeable
    /// and labels are accepted too, so `"Roller Coaster"` finds the same ride
    /// as `"rollercoaster"`.
    pub fn create_named(name: &str) -> Result<Box<dyn Attraction>> {
        let kind = choice::parse::<AttractionKind>(name)?;
        Ok(Self::create(kind))
    }

    pub fn sheet(kind: AttractionKind) -> AttractionSheet {
        let attraction = Self::create(kind);
        AttractionSheet {
            kind,
            name: attraction.name(),
            requirement: attraction.requirement(),
            notes: attraction.notes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::Choice;
    use crate::error::Error;

    #[test]
    fn requirements_per_kind() {
        let scores = AttractionKind::ALL
            .iter()
            .map(|k| AttractionFactory::create(*k).requirement())
            .collect::<Vec<_>>();
        assert_eq!(scores, vec![20, 50, 75]);
    }

    #[test]
    fn named_lookup_matches_enum_lookup() {
        let a = AttractionFactory::create_named("hauntedhouse").unwrap();
        assert_eq!(a.name(), "Haunted House");
        assert_eq!(a.notes().keys().copied().collect::<Vec<_>>(), vec!["age", "warning"]);
    }

    #[test]
    fn unknown_name_fails() {
        let err = AttractionFactory::create_named("ferris wheel").err().unwrap();
        assert_eq!(
            err,
            Error::UnknownChoice { kind: "attraction", value: "ferris wheel".into() }
        );
    }

    #[test]
    fn kinds_serialize_as_single_words() {
        assert_eq!(
            serde_json::to_value(AttractionKind::ALL).unwrap(),
            serde_json::json!(["ROLLERCOASTER", "HAUNTEDHOUSE", "WATERSLIDE"])
        );
    }

    #[test]
    fn named_lookup_accepts_labels() {
        let a = AttractionFactory::create_named("Roller Coaster").unwrap();
        assert_eq!(a.requirement(), 20);
    }

    #[test]
    fn sheet_serializes_notes_in_order() {
        let json = serde_json::to_string(&AttractionFactory::sheet(AttractionKind::Waterslide)).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"WATERSLIDE","name":"Water Slide","requirement":75,"notes":{"swimming":"Must be able to swim","lockers":"Locker rental available for personal items"}}"#
        );
    }
}
