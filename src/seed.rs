//! Static reference datasets
//!
//! The seed visitors are shown alongside user check-ins but never stored
//! with them; they are combined only when the visitor list is queried.

use once_cell::sync::Lazy;

use crate::models::{
    destination::{Destination, Zone},
    enums::Beach,
    visitor::Visitor,
};

fn visitor(id: &str, name: &str, city: &str, beach: Beach, date: &str) -> Visitor {
    Visitor {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        beach,
        date: date.to_string(),
    }
}

/// Reference check-ins listed after the live ones
pub static SEED_VISITORS: Lazy<Vec<Visitor>> = Lazy::new(|| {
    vec![
        visitor("m1", "Ahmad Subarjo", "Yogyakarta", Beach::Parangtritis, "2025-12-04"),
        visitor("m2", "Bunga Citra", "Jakarta", Beach::Depok, "2025-12-04"),
        visitor("m3", "Cahyo Nugroho", "Sleman", Beach::Parangkusumo, "2025-12-03"),
        visitor("m4", "Dewi Lestari", "Bantul", Beach::GoaCemara, "2025-12-03"),
        visitor("m5", "Eko Prasetyo", "Surabaya", Beach::Baru, "2025-12-02"),
        visitor("m6", "Fajar Shodiq", "Solo", Beach::Parangtritis, "2025-12-02"),
        visitor("m7", "Gita Gutawa", "Bandung", Beach::CemaraSewu, "2025-12-01"),
        visitor("m8", "Hesti Purwanti", "Semarang", Beach::Depok, "2025-12-01"),
        visitor("m9", "Indra Bekti", "Jakarta", Beach::Kuwaru, "2025-11-30"),
        visitor("m10", "Joko Anwar", "Medan", Beach::Baros, "2025-11-30"),
        visitor("m11", "Kurnia Meiga", "Malang", Beach::Parangtritis, "2025-11-29"),
        visitor("m12", "Lina Marlina", "Tasikmalaya", Beach::Samas, "2025-11-29"),
        visitor("m13", "Miko Wijaya", "Yogyakarta", Beach::Pandansari, "2025-11-28"),
        visitor("m14", "Nina Zatulini", "Padang", Beach::Parangkusumo, "2025-11-28"),
        visitor("m15", "Oscar Lawalata", "Surabaya", Beach::Baru, "2025-11-27"),
        visitor("m16", "Putri Titian", "Palembang", Beach::GoaCemara, "2025-11-27"),
        visitor("m17", "Qori Sandioriva", "Aceh", Beach::Depok, "2025-11-26"),
        visitor("m18", "Rina Nose", "Bandung", Beach::Parangtritis, "2025-11-26"),
        visitor("m19", "Surya Saputra", "Jakarta", Beach::CemaraSewu, "2025-11-25"),
        visitor("m20", "Tono Sudirjo", "Klaten", Beach::Kuwaru, "2025-11-25"),
    ]
});

/// Check-ins the store can start with when `store.preload_demo` is set
pub fn demo_visitors() -> Vec<Visitor> {
    vec![
        visitor("1", "Ahmad Subarjo", "Yogyakarta", Beach::Parangtritis, "2025-12-01"),
        visitor("2", "Budi Santoso", "Sleman", Beach::Parangkusumo, "2025-12-02"),
        visitor("3", "Citra Lestari", "Bantul", Beach::Depok, "2025-12-03"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn destination(
    id: &str,
    beach: Beach,
    zone: Zone,
    opening_hours: &str,
    price: u32,
    capacity: u32,
    visitors: u32,
    image: &str,
) -> Destination {
    Destination {
        id: id.to_string(),
        beach,
        zone,
        opening_hours: opening_hours.to_string(),
        price,
        capacity,
        visitors,
        image: image.to_string(),
    }
}

/// Destination catalog in display order
pub static DESTINATIONS: Lazy<Vec<Destination>> = Lazy::new(|| {
    vec![
        destination("1", Beach::Parangtritis, Zone::East, "24 Jam", 10_000, 15_000, 8_500,
            "https://panduanwisata.b-cdn.net/wp-content/uploads/2021/05/Pemandangan-Pantai-Parangtritis-by-GMap.jpg"),
        destination("2", Beach::Parangkusumo, Zone::East, "24 Jam", 10_000, 5_000, 1_200,
            "https://seringjalan.com/wp-content/uploads/2020/05/WhatsApp-Image-2020-05-12-at-1.41.21-PM-816x459.jpeg"),
        destination("3", Beach::Depok, Zone::East, "06.00 - 18.00", 7_500, 8_000, 4_500,
            "https://travelspromo.com/wp-content/uploads/2019/09/Kungfu-Baik-Pesaing-Pantai-Parngtritis-e1570093803621-1536x960.jpg"),
        destination("4", Beach::CemaraSewu, Zone::Central, "05.00 - 19.00", 5_000, 3_000, 800,
            "https://travelspromo.com/wp-content/uploads/2020/04/2-Pantai-Seribu-Cemara-indrasmara-ilham-1536x864.jpg"),
        destination("5", Beach::GoaCemara, Zone::Central, "06.00 - 18.00", 5_000, 3_500, 1_500,
            "https://www.simplyhomy-guesthouse.com/wp-content/uploads/2017/08/cemara-1.jpg"),
        destination("6", Beach::Samas, Zone::Central, "05.00 - 18.00", 4_000, 2_000, 500,
            "https://nagantour.com/wp-content/uploads/2023/03/Pesona-Pengklik-Pantai-Samas.webp"),
        destination("7", Beach::Pandansari, Zone::Central, "05.00 - 18.00", 5_000, 2_500, 600,
            "https://yukdolan.com/wp-content/uploads/2023/09/Pantai-Pandansari-Jogja.jpg"),
        destination("8", Beach::Kuwaru, Zone::West, "06.00 - 17.00", 5_000, 2_000, 450,
            "https://travelspromo.com/wp-content/uploads/2019/10/Pantai-Kuwaru-Bantul-Alfian-Solihin.jpg"),
        destination("9", Beach::Baru, Zone::West, "05.00 - 19.00", 4_000, 4_000, 2_100,
            "https://homestaydijogja.net/wp-content/uploads/2023/09/Pantai-baru-bantul-jogja.jpg"),
        destination("10", Beach::Baros, Zone::West, "08.00 - 17.00", 3_000, 1_500, 300,
            "https://widyalokawisata.com/wp-content/uploads/2020/03/Pantai-Baros.webp"),
    ]
});
