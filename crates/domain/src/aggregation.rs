//! Joining wards with their beds into one flat listing.
//!
//! Wards without beds are dropped entirely; they never show up as empty
//! groups.

use crate::bed::{Bed, BedWithLocation};
use crate::location::Location;

/// Attach `ward` to every bed fetched for it.
///
/// Returns `None` when `beds` is empty so the ward can be discarded.
#[must_use]
pub fn group(ward: &Location, beds: Vec<Bed>) -> Option<Vec<BedWithLocation>> {
    if beds.is_empty() {
        return None;
    }
    Some(
        beds.into_iter()
            .map(|bed| BedWithLocation {
                bed,
                location: ward.clone(),
            })
            .collect(),
    )
}

/// Group every `(ward, beds)` pair and flatten the kept groups, preserving
/// ward iteration order and the backend's bed order within a ward.
pub fn aggregate<I>(wards: I) -> Vec<BedWithLocation>
where
    I: IntoIterator<Item = (Location, Vec<Bed>)>,
{
    wards
        .into_iter()
        .filter_map(|(ward, beds)| group(&ward, beds))
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{BedId, LocationId};

    fn beds(n: usize) -> Vec<Bed> {
        (1..=n)
            .map(|i| Bed::new(BedId::new(), format!("B{i}"), "AVAILABLE"))
            .collect()
    }

    #[test]
    fn should_drop_wards_without_beds() {
        let empty = Location::new(LocationId::new(), "Empty ward");
        assert!(group(&empty, Vec::new()).is_none());

        let listing = aggregate(vec![(empty, Vec::new())]);
        assert!(listing.is_empty());
    }

    #[test]
    fn should_emit_one_entry_per_bed_carrying_its_ward() {
        let first = Location::new(LocationId::new(), "Ward A");
        let second = Location::new(LocationId::new(), "Ward B");

        let listing = aggregate(vec![
            (first.clone(), beds(3)),
            (second.clone(), Vec::new()),
        ]);

        assert_eq!(listing.len(), 3);
        assert!(listing.iter().all(|r| r.location.uuid == first.uuid));
        assert!(listing.iter().all(|r| r.location.uuid != second.uuid));
    }

    #[test]
    fn should_preserve_ward_order_then_bed_order() {
        let first = Location::new(LocationId::new(), "Ward A");
        let second = Location::new(LocationId::new(), "Ward B");

        let listing = aggregate(vec![(first, beds(2)), (second, beds(1))]);
        let labels: Vec<(String, String)> = listing
            .iter()
            .map(|r| (r.location.display.clone(), r.bed.bed_number.clone()))
            .collect();

        assert_eq!(
            labels,
            vec![
                ("Ward A".to_string(), "B1".to_string()),
                ("Ward A".to_string(), "B2".to_string()),
                ("Ward B".to_string(), "B1".to_string()),
            ]
        );
    }
}
