use wordgame_core::GameSession;
use wordgame_types::WordEntry;

pub fn cat_entry() -> WordEntry {
    WordEntry::new("animals", "cat", "Small domestic feline")
}

pub fn start_cat_session() -> GameSession {
    GameSession::start("alice", cat_entry()).expect("playable word")
}
