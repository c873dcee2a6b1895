// Room inventory: rooms keyed by their (unique) room number

use std::collections::{btree_map::Entry, BTreeMap};

use rand::rngs::StdRng;
use tracing::debug;

use crate::{
    config::HotelConfig,
    room::{Room, RoomCategory},
    service::RoomError,
};

#[derive(Debug)]
pub struct Inventory {
    rooms: BTreeMap<u32, Room>,
    rng: StdRng,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(&HotelConfig::default())
    }
}

impl Inventory {
    pub fn new(config: &HotelConfig) -> Self {
        Self {
            rooms: BTreeMap::new(),
            rng: config.rng(),
        }
    }

    pub fn add(&mut self, room: Room) -> Result<(), RoomError> {
        match self.rooms.entry(room.room_number()) {
            Entry::Occupied(e) => Err(RoomError::DuplicateRoom(*e.key())),
            Entry::Vacant(e) => {
                log_added(&room);
                e.insert(room);
                Ok(())
            }
        }
    }

    // Capacity is drawn from the inventory's generator, only for a free number
    pub fn open_room(
        &mut self,
        room_number: u32,
        price_per_night: u32,
        category: RoomCategory,
    ) -> Result<&Room, RoomError> {
        match self.rooms.entry(room_number) {
            Entry::Occupied(_) => Err(RoomError::DuplicateRoom(room_number)),
            Entry::Vacant(e) => {
                let room = Room::with_random_capacity(
                    room_number,
                    price_per_night,
                    category,
                    &mut self.rng,
                );
                log_added(&room);
                Ok(e.insert(room))
            }
        }
    }

    pub fn get(&self, room_number: u32) -> Option<&Room> {
        self.rooms.get(&room_number)
    }

    pub fn room_mut(&mut self, room_number: u32) -> Result<&mut Room, RoomError> {
        self.rooms
            .get_mut(&room_number)
            .ok_or(RoomError::NotFound(room_number))
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    // Rooms of `category`, including its specializations.
    pub fn by_category(&self, category: RoomCategory) -> impl Iterator<Item = &Room> {
        self.rooms
            .values()
            .filter(move |room| room.category().is_a(category))
    }

    pub fn available(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values().filter(|room| !room.is_booked())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

fn log_added(room: &Room) {
    debug!(
        room = room.room_number(),
        category = %room.category(),
        capacity = room.max_capacity(),
        price = room.price_per_night(),
        "room added"
    );
}
