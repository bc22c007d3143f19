use crate::day::DayKey;
use crate::hash::seed_hash;
use crate::models::CatRecord;

/// Out of 100; hashes below this pick a personal cat.
pub const PERSONAL_CAT_PERCENT: u32 = 30;

pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=800";

pub const FACTS: &[&str] = &[
    "Cats sleep for around 13 to 16 hours a day.",
    "A group of cats is called a clowder.",
    "Cats have five toes on their front paws but only four on the back ones.",
    "A cat's nose print is unique, much like a human fingerprint.",
    "Cats can rotate their ears 180 degrees.",
    "The oldest known pet cat was found in a 9,500-year-old grave in Cyprus.",
    "Cats spend roughly a third of their waking hours grooming.",
    "A cat's purr vibrates at a frequency between 25 and 150 Hz.",
    "Cats can jump up to six times their body length.",
    "Adult cats meow mostly to communicate with humans, not other cats.",
    "Whiskers are roughly as wide as a cat's body and help it judge tight spaces.",
    "Cats walk like camels and giraffes, moving both right feet and then both left.",
];

pub const NAMES: &[&str] = &[
    "Whiskers", "Mochi", "Luna", "Oliver", "Pumpkin", "Shadow", "Biscuit", "Nala", "Tofu",
    "Ginger", "Pepper", "Simba",
];

pub const STOCK_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?w=800",
    "https://images.unsplash.com/photo-1495360010541-f48722b34f7d?w=800",
    "https://images.unsplash.com/photo-1573865526739-10659fec78a5?w=800",
    "https://images.unsplash.com/photo-1533738363-b7f9aef128ce?w=800",
    "https://images.unsplash.com/photo-1526336024174-e58f5cdd8e13?w=800",
    "https://images.unsplash.com/photo-1511044568932-338cba0ad803?w=800",
    "https://images.unsplash.com/photo-1543852786-1cf6624b9987?w=800",
    "https://images.unsplash.com/photo-1472491235688-bdc81a63246e?w=800",
];

pub fn personal_cats() -> Vec<CatRecord> {
    vec![
        CatRecord {
            id: "personal-1".to_string(),
            image_url: "https://images.unsplash.com/photo-1574158622682-e40e69881006?w=800"
                .to_string(),
            fact: "Pixel naps in the laundry basket every afternoon and refuses to move."
                .to_string(),
            display_name: "Pixel".to_string(),
            is_personal: true,
        },
        CatRecord {
            id: "personal-2".to_string(),
            image_url: "https://images.unsplash.com/photo-1592194996308-7b43878e84a6?w=800"
                .to_string(),
            fact: "Clementine learned to open the treat drawer on her own.".to_string(),
            display_name: "Clementine".to_string(),
            is_personal: true,
        },
    ]
}

pub fn fallback_cat() -> CatRecord {
    CatRecord {
        id: "fallback".to_string(),
        image_url: FALLBACK_IMAGE_URL.to_string(),
        fact: FACTS[0].to_string(),
        display_name: NAMES[0].to_string(),
        is_personal: false,
    }
}

/// Deterministic cat of the day, derived only from the date key.
pub fn daily_cat(today: DayKey) -> CatRecord {
    let key = today.to_string();
    let hash = seed_hash(&key) as usize;
    let personal = personal_cats();

    if (hash % 100) < PERSONAL_CAT_PERCENT as usize && !personal.is_empty() {
        let index = hash % personal.len();
        return personal[index].clone();
    }

    CatRecord {
        id: format!("daily-{key}"),
        image_url: STOCK_IMAGES[hash % STOCK_IMAGES.len()].to_string(),
        fact: FACTS[hash % FACTS.len()].to_string(),
        display_name: NAMES[(hash + 1) % NAMES.len()].to_string(),
        is_personal: false,
    }
}
