pub mod deck_data;
pub mod keybindings_data;
pub mod storage;
