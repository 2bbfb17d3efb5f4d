use chrono::NaiveDate;

use crate::models::{Coordinate, Event};

struct CatalogEntry {
    id: u64,
    title: &'static str,
    description: &'static str,
    sport: &'static str,
    date: (i32, u32, u32),
    location: &'static str,
    lat: f64,
    lng: f64,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: 1,
        title: "Московский марафон 2024",
        description: "Ежегодный осенний марафон через центр Москвы. Дистанции: 10км, 21.1км, 42.2км",
        sport: "бег",
        date: (2024, 9, 15),
        location: "Москва, Воробьевы горы",
        lat: 55.710,
        lng: 37.553,
    },
    CatalogEntry {
        id: 2,
        title: "Ночной велопробег",
        description: "Ночная велопрогулка по освещенным улицам города. Безопасность обеспечивается организаторами",
        sport: "велоспорт",
        date: (2024, 10, 20),
        location: "Москва, Парк Горького",
        lat: 55.731,
        lng: 37.603,
    },
    CatalogEntry {
        id: 3,
        title: "Открытие лыжного сезона в Крылатском",
        description: "Групповая лыжная прогулка с инструкторами. Прокат оборудования доступен на месте",
        sport: "лыжи",
        date: (2024, 12, 10),
        location: "Москва, Крылатское",
        lat: 55.756,
        lng: 37.438,
    },
    CatalogEntry {
        id: 4,
        title: "Утренняя йога в Сокольниках",
        description: "Бесплатное занятие йогой на свежем воздухе. Приносите свои коврики!",
        sport: "йога",
        date: (2024, 8, 25),
        location: "Москва, Сокольники",
        lat: 55.795,
        lng: 37.679,
    },
];

/// Built-in event list served when no remote source is reachable
pub fn static_events() -> Vec<Event> {
    CATALOG
        .iter()
        .filter_map(|entry| {
            let (year, month, day) = entry.date;
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(Event {
                id: entry.id,
                title: entry.title.to_string(),
                description: entry.description.to_string(),
                sport: entry.sport.to_string(),
                date,
                location: entry.location.to_string(),
                coordinate: Coordinate { latitude: entry.lat, longitude: entry.lng },
            })
        })
        .collect()
}
