use schema::GridCell;

/// A named place the GPS panel offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub name: &'static str,
    pub cell: GridCell,
}

pub const DESTINATIONS: [Destination; 3] = [
    Destination {
        name: "Gym",
        cell: GridCell::new(24, 23),
    },
    Destination {
        name: "Shop",
        cell: GridCell::new(54, 13),
    },
    Destination {
        name: "Delta",
        cell: GridCell::new(55, 30),
    },
];

pub fn find_destination(name: &str) -> Option<&'static Destination> {
    DESTINATIONS
        .iter()
        .find(|destination| destination.name.eq_ignore_ascii_case(name))
}
