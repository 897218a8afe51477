use std::{
    fs,
    sync::{Arc, Barrier},
    thread,
};

use cosmian_leveled_logger::{init, Level, LogOptions};

#[test]
fn test_concurrent_init_creates_a_single_log_file() {
    const THREADS: usize = 8;

    let dir = tempfile::tempdir().unwrap();
    let options = LogOptions {
        log_dir: Some(dir.path().to_path_buf()),
        ..LogOptions::default()
    };
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            let options = options.clone();
            thread::spawn(move || {
                barrier.wait();
                init(&options) as *const _ as usize
            })
        })
        .collect();
    let loggers: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(loggers.windows(2).all(|pair| pair[0] == pair[1]));
    let logger = init(&options);
    assert_eq!(loggers[0], logger as *const _ as usize);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    // every init after the first one warns, and no warning reports a missing file
    assert_eq!(logger.count(Level::Warning), THREADS as u64);
}
