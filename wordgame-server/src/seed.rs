use anyhow::Result;
use tracing::info;
use wordgame_persistence::repositories::WordRepository;
use wordgame_types::WordEntry;

fn starter_words() -> Vec<WordEntry> {
    vec![
        WordEntry::new("animals", "elephant", "Large gray mammal with a trunk"),
        WordEntry::new("animals", "giraffe", "Tallest land animal with a long neck"),
        WordEntry::new("animals", "penguin", "Black and white bird that cannot fly"),
        WordEntry::new("animals", "dolphin", "Intelligent marine mammal"),
        WordEntry::new("countries", "france", "European country famous for the Eiffel Tower"),
        WordEntry::new("countries", "japan", "Island nation known for sushi and technology"),
        WordEntry::new("countries", "brazil", "South American country famous for football"),
        WordEntry::new("food", "pizza", "Italian dish with cheese and toppings"),
        WordEntry::new("food", "sushi", "Japanese dish with rice and fish"),
        WordEntry::new("food", "hummus", "Middle Eastern chickpea spread"),
        WordEntry::new("technology", "computer", "Electronic device for processing data"),
        WordEntry::new("technology", "internet", "Global network connecting computers"),
    ]
}

/// Populate the word catalog on a fresh install. Does nothing when
/// any words already exist.
pub async fn seed_initial_words(words: &WordRepository) -> Result<usize> {
    if words.count().await? > 0 {
        return Ok(0);
    }

    let mut seeded = 0;
    for entry in starter_words() {
        if words.add(&entry).await? {
            seeded += 1;
        }
    }

    info!("Seeded {} starter words", seeded);
    Ok(seeded)
}
