// Room service: clean / reserve / free with a guard against double-booking

use std::{cell::RefCell, fmt};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::room::Room;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    #[error("Комната #{0} уже забронирована")]
    AlreadyBooked(u32),

    #[error("Комната #{0} уже существует")]
    DuplicateRoom(u32),

    #[error("Комната #{0} не найдена")]
    NotFound(u32),
}

// Minimal capability the service needs from a room
pub trait Bookable {
    fn room_number(&self) -> u32;
    fn is_booked(&self) -> bool;
    fn set_booked(&mut self, booked: bool);
}

impl Bookable for Room {
    fn room_number(&self) -> u32 {
        Room::room_number(self)
    }

    fn is_booked(&self) -> bool {
        Room::is_booked(self)
    }

    fn set_booked(&mut self, booked: bool) {
        Room::set_booked(self, booked)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Cleaned,
    Reserved,
    Freed,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::Cleaned => "убрана",
            Action::Reserved => "забронирована",
            Action::Freed => "освобождена",
        };
        f.write_str(text)
    }
}

// One line per operation: "Комната #<number> <action>"
pub fn notice(room_number: u32, action: Action) -> String {
    format!("Комната #{} {}", room_number, action)
}

// Sink for the human-readable notices
pub trait Reporter {
    fn report(&self, line: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, line: &str) {
        println!("{}", line);
    }
}

// Keeps every reported line, handy for tests and benchmarks
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: RefCell<Vec<String>>,
}

impl MemoryReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

impl<P: Reporter + ?Sized> Reporter for &P {
    fn report(&self, line: &str) {
        (**self).report(line)
    }
}

pub trait RoomService<R: Bookable + ?Sized> {
    fn clean(&self, room: &R);

    // Fails if the room is already booked, leaving it untouched
    fn reserve(&self, room: &mut R) -> Result<(), RoomError>;

    fn free(&self, room: &mut R);
}

// Stateless apart from the reporter it writes notices to.
//
// `reserve` is a check-then-set over `&mut R`. Sharing rooms across threads
// needs a lock per room held for the whole call.
#[derive(Debug, Default, Clone)]
pub struct HotelService<P: Reporter = ConsoleReporter> {
    reporter: P,
}

impl HotelService<ConsoleReporter> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Reporter> HotelService<P> {
    pub fn with_reporter(reporter: P) -> Self {
        Self { reporter }
    }

    pub fn reporter(&self) -> &P {
        &self.reporter
    }

    fn announce(&self, room_number: u32, action: Action) {
        self.reporter.report(&notice(room_number, action));
    }
}

impl<R: Bookable + ?Sized, P: Reporter> RoomService<R> for HotelService<P> {
    fn clean(&self, room: &R) {
        let number = room.room_number();
        debug!(room = number, "room cleaned");
        self.announce(number, Action::Cleaned);
    }

    fn reserve(&self, room: &mut R) -> Result<(), RoomError> {
        let number = room.room_number();
        if room.is_booked() {
            warn!(room = number, "reserve rejected: room already booked");
            return Err(RoomError::AlreadyBooked(number));
        }

        room.set_booked(true);
        info!(room = number, "room reserved");
        self.announce(number, Action::Reserved);
        Ok(())
    }

    fn free(&self, room: &mut R) {
        let number = room.room_number();
        room.set_booked(false);
        info!(room = number, "room freed");
        self.announce(number, Action::Freed);
    }
}
