// Adapters layer: concrete implementations for external systems (flat-file storage).

pub mod storage;

pub use storage::{
    load_students_from_file, save_students_to_file, FlatFileStorage, DEFAULT_DATA_FILE,
};
