// Sample run: four rooms through clean/reserve/free, then a double-booking attempt

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hotel_rooms::{
    ConfigError, HotelConfig, HotelService, Inventory, Reporter, Room, RoomCategory, RoomError,
    RoomService,
};

const SAMPLE_ROOMS: [(u32, u32, RoomCategory); 4] = [
    (101, 1500, RoomCategory::Economy),
    (201, 3000, RoomCategory::Standard),
    (301, 5000, RoomCategory::Lux),
    (401, 10000, RoomCategory::UltraLux),
];

// A config that cannot be read falls back to the defaults
fn load_config(path: Option<&str>) -> (HotelConfig, Option<ConfigError>) {
    match path.map(HotelConfig::load) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (HotelConfig::default(), Some(e)),
        None => (HotelConfig::default(), None),
    }
}

fn exercise<P: Reporter>(service: &HotelService<P>, room: &mut Room) -> Result<(), RoomError> {
    service.reporter().report(&format!(
        "\nТестируем комнату #{} ({}Room)",
        room.room_number(),
        room.category()
    ));
    service.clean(&*room);
    service.reserve(room)?;
    service.free(room);
    Ok(())
}

// Returns the rejection of the final reserve, if any
fn run<P: Reporter>(
    service: &HotelService<P>,
    inventory: &mut Inventory,
) -> Result<Option<RoomError>, RoomError> {
    for (number, price, category) in SAMPLE_ROOMS {
        inventory.open_room(number, price, category)?;
    }
    info!(rooms = inventory.len(), "inventory ready");

    for (number, _, _) in SAMPLE_ROOMS {
        exercise(service, inventory.room_mut(number)?)?;
    }

    // Book #101 again, then try once more while it is still booked
    service.reserve(inventory.room_mut(101)?)?;
    match service.reserve(inventory.room_mut(101)?) {
        Ok(()) => Ok(None),
        Err(e) => {
            service.reporter().report(&format!("Ошибка: {}", e));
            Ok(Some(e))
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Optional first argument: path to a JSON config
    let path = std::env::args().nth(1);
    let (config, load_error) = load_config(path.as_deref());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    if let Some(e) = load_error {
        warn!(path = ?path, error = %e, "config not loaded, using defaults");
    }

    let service = HotelService::new();
    let mut inventory = Inventory::new(&config);
    run(&service, &mut inventory)?;

    Ok(())
}
