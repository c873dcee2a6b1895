// Room model: one concrete room record tagged with its category

use std::fmt;

use rand::Rng;

// Bounds for randomly generated capacity (inclusive)
pub const MIN_CAPACITY: u32 = 1;
pub const MAX_CAPACITY: u32 = 6;

// Room categories. Lux specializes Standard, UltraLux specializes Lux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoomCategory {
    Economy,
    Standard,
    Lux,
    UltraLux,
}

impl RoomCategory {
    pub const ALL: [RoomCategory; 4] = [
        RoomCategory::Economy,
        RoomCategory::Standard,
        RoomCategory::Lux,
        RoomCategory::UltraLux,
    ];

    // Direct generalization of this category, if any.
    pub fn parent(self) -> Option<RoomCategory> {
        match self {
            RoomCategory::Economy | RoomCategory::Standard => None,
            RoomCategory::Lux => Some(RoomCategory::Standard),
            RoomCategory::UltraLux => Some(RoomCategory::Lux),
        }
    }

    // True if `self` is `other` or specializes it.
    pub fn is_a(self, other: RoomCategory) -> bool {
        let mut current = Some(self);
        while let Some(category) = current {
            if category == other {
                return true;
            }
            current = category.parent();
        }
        false
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomCategory::Economy => "Economy",
            RoomCategory::Standard => "Standard",
            RoomCategory::Lux => "Lux",
            RoomCategory::UltraLux => "UltraLux",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Free,
    Booked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    room_number: u32,
    max_capacity: u32,
    price_per_night: u32,
    category: RoomCategory,
    booked: bool,
}

// Draw a capacity uniformly in [MIN_CAPACITY, MAX_CAPACITY]
pub fn random_capacity<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(MIN_CAPACITY..=MAX_CAPACITY)
}

impl Room {
    // Fields are stored verbatim, no validation
    pub fn new(
        room_number: u32,
        max_capacity: u32,
        price_per_night: u32,
        category: RoomCategory,
    ) -> Self {
        Self {
            room_number,
            max_capacity,
            price_per_night,
            category,
            booked: false,
        }
    }

    pub fn with_random_capacity<R: Rng + ?Sized>(
        room_number: u32,
        price_per_night: u32,
        category: RoomCategory,
        rng: &mut R,
    ) -> Self {
        Self::new(room_number, random_capacity(rng), price_per_night, category)
    }

    // Uses the thread-local generator, not reproducible
    pub fn random(room_number: u32, price_per_night: u32, category: RoomCategory) -> Self {
        Self::with_random_capacity(
            room_number,
            price_per_night,
            category,
            &mut rand::thread_rng(),
        )
    }

    pub fn room_number(&self) -> u32 {
        self.room_number
    }

    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    pub fn price_per_night(&self) -> u32 {
        self.price_per_night
    }

    pub fn category(&self) -> RoomCategory {
        self.category
    }

    pub fn is_booked(&self) -> bool {
        self.booked
    }

    pub fn availability(&self) -> Availability {
        if self.booked {
            Availability::Booked
        } else {
            Availability::Free
        }
    }

    // Unconditional. The double-booking guard lives in the service's `reserve`.
    pub fn set_booked(&mut self, booked: bool) {
        self.booked = booked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_new_room_is_free() {
        for category in RoomCategory::ALL {
            let room = Room::new(101, 2, 1500, category);
            assert!(!room.is_booked());
            assert_eq!(room.availability(), Availability::Free);
            assert_eq!(room.room_number(), 101);
            assert_eq!(room.max_capacity(), 2);
            assert_eq!(room.price_per_night(), 1500);
            assert_eq!(room.category(), category);
        }
    }

    #[test]
    fn test_random_capacity_in_range() {
        for i in 0..1000 {
            let room = Room::random(i, 3000, RoomCategory::Standard);
            assert!(
                (MIN_CAPACITY..=MAX_CAPACITY).contains(&room.max_capacity()),
                "capacity out of range: {}",
                room.max_capacity()
            );
            assert!(!room.is_booked());
        }
    }

    #[test]
    fn test_seeded_capacity_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        let first: Vec<u32> = (0..20).map(|_| random_capacity(&mut a)).collect();
        let second: Vec<u32> = (0..20).map(|_| random_capacity(&mut b)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_random_capacity_covers_every_value() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; MAX_CAPACITY as usize];
        for _ in 0..1000 {
            seen[(random_capacity(&mut rng) - MIN_CAPACITY) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "missing capacities: {:?}", seen);
    }

    #[test]
    fn test_set_booked_is_unguarded() {
        let mut room = Room::new(201, 4, 3000, RoomCategory::Standard);
        room.set_booked(true);
        room.set_booked(true);
        assert_eq!(room.availability(), Availability::Booked);
        room.set_booked(false);
        assert!(!room.is_booked());
    }

    #[test]
    fn test_category_taxonomy() {
        assert!(RoomCategory::UltraLux.is_a(RoomCategory::Lux));
        assert!(RoomCategory::UltraLux.is_a(RoomCategory::Standard));
        assert!(RoomCategory::Lux.is_a(RoomCategory::Standard));
        assert!(RoomCategory::Lux.is_a(RoomCategory::Lux));

        assert!(!RoomCategory::Standard.is_a(RoomCategory::Lux));
        assert!(!RoomCategory::Economy.is_a(RoomCategory::Standard));
        assert!(!RoomCategory::UltraLux.is_a(RoomCategory::Economy));

        assert_eq!(RoomCategory::Economy.parent(), None);
        assert_eq!(RoomCategory::UltraLux.parent(), Some(RoomCategory::Lux));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(RoomCategory::UltraLux.to_string(), "UltraLux");
        assert_eq!(RoomCategory::Economy.to_string(), "Economy");
    }
}
