use aura_core::audio::CueLog;
use aura_core::repo::board_store::{COUNT_KEY, NOTES_KEY};
use aura_core::{
    AudioCue, AudioEngine, Board, BoardError, BoardOptions, BurstOutcome, ItemId, KvRepository,
    MemoryKvRepository, RecordingBackend,
};

fn options() -> BoardOptions {
    BoardOptions {
        rng_seed: Some(42),
        ..BoardOptions::default()
    }
}

fn open_board(repo: &MemoryKvRepository) -> (Board<MemoryKvRepository>, CueLog) {
    let backend = RecordingBackend::new();
    let log = backend.log();
    let board = Board::open(repo.clone(), AudioEngine::new(Box::new(backend)), options()).unwrap();
    (board, log)
}

fn note_texts(board: &Board<MemoryKvRepository>) -> Vec<String> {
    board.notes().iter().map(|note| note.text.clone()).collect()
}

#[test]
fn notes_round_trip_in_order_without_replay_cues() {
    let repo = MemoryKvRepository::new();
    let (mut board, log) = open_board(&repo);
    for text in ["breathe", "call the bank", "buy figs"] {
        board.submit_note(text).unwrap();
    }
    assert_eq!(log.cues(), vec![AudioCue::Pop; 3]);
    assert_eq!(
        repo.raw(NOTES_KEY).unwrap(),
        r#"["breathe","call the bank","buy figs"]"#
    );
    drop(board);

    let (reloaded, replay_log) = open_board(&repo);
    assert_eq!(note_texts(&reloaded), vec!["breathe", "call the bank", "buy figs"]);
    assert!(replay_log.cues().is_empty());
}

#[test]
fn submit_note_trims_input() {
    let repo = MemoryKvRepository::new();
    let (mut board, _) = open_board(&repo);
    board.submit_note("   stretch  ").unwrap().unwrap();
    assert_eq!(note_texts(&board), vec!["stretch"]);
}

#[test]
fn blank_submissions_create_nothing_and_write_nothing() {
    let repo = MemoryKvRepository::new();
    let (mut board, log) = open_board(&repo);
    let writes_after_open = repo.write_count();

    assert_eq!(board.submit_note("").unwrap(), None);
    assert_eq!(board.submit_note("  \t ").unwrap(), None);
    assert_eq!(board.submit_task("\n").unwrap(), None);

    assert!(board.notes().is_empty());
    assert!(board.tasks().is_empty());
    assert_eq!(repo.write_count(), writes_after_open);
    assert!(log.cues().is_empty());
}

#[test]
fn burst_removes_note_only_after_delay() {
    let repo = MemoryKvRepository::new();
    let (mut board, log) = open_board(&repo);
    let keep = board.submit_note("keep").unwrap().unwrap();
    let pop = board.submit_note("pop me").unwrap().unwrap();
    log.clear();

    let outcome = board.burst_note(pop, 10_000).unwrap();
    assert_eq!(outcome, BurstOutcome::Started { remove_at_ms: 10_200 });
    assert_eq!(log.cues(), vec![AudioCue::Burst]);
    assert_eq!(repo.raw(COUNT_KEY).unwrap(), "1");

    let early = board.tick(10_100).unwrap();
    assert!(early.removed_notes.is_empty());
    assert_eq!(repo.raw(NOTES_KEY).unwrap(), r#"["keep","pop me"]"#);

    let due = board.tick(10_200).unwrap();
    assert_eq!(due.removed_notes, vec![pop]);
    assert_eq!(repo.raw(NOTES_KEY).unwrap(), r#"["keep"]"#);
    assert_eq!(board.notes()[0].id, keep);
}

#[test]
fn counter_increases_by_number_of_bursts_and_survives_reload() {
    let repo = MemoryKvRepository::new();
    let (mut board, _) = open_board(&repo);
    let ids: Vec<ItemId> = (0..4)
        .map(|i| board.submit_note(&format!("thought {i}")).unwrap().unwrap())
        .collect();

    let mut previous = board.burst_count();
    for (step, id) in ids.iter().take(3).enumerate() {
        board.burst_note(*id, step as i64 * 1_000).unwrap();
        assert!(board.burst_count() > previous);
        previous = board.burst_count();
    }
    board.tick(60_000).unwrap();
    assert_eq!(board.burst_count(), 3);
    drop(board);

    let (mut reloaded, _) = open_board(&repo);
    assert_eq!(reloaded.burst_count(), 3);
    assert_eq!(note_texts(&reloaded), vec!["thought 3"]);

    let last = reloaded.notes()[0].id;
    reloaded.burst_note(last, 0).unwrap();
    assert_eq!(repo.raw(COUNT_KEY).unwrap(), "4");
}

#[test]
fn double_click_on_fading_bubble_counts_once() {
    let repo = MemoryKvRepository::new();
    let (mut board, log) = open_board(&repo);
    let id = board.submit_note("once").unwrap().unwrap();
    log.clear();

    board.burst_note(id, 0).unwrap();
    assert_eq!(board.burst_note(id, 50).unwrap(), BurstOutcome::AlreadyBursting);
    assert_eq!(board.burst_count(), 1);
    assert_eq!(log.cues(), vec![AudioCue::Burst]);
}

#[test]
fn bursting_unknown_note_is_an_error() {
    let repo = MemoryKvRepository::new();
    let (mut board, _) = open_board(&repo);
    let err = board.burst_note(ItemId::new(7), 0).unwrap_err();
    assert!(matches!(err, BoardError::NoteNotFound(id) if id == ItemId::new(7)));
    assert_eq!(board.burst_count(), 0);
}

#[test]
fn note_created_while_another_fades_persists_both() {
    let repo = MemoryKvRepository::new();
    let (mut board, _) = open_board(&repo);
    let fading = board.submit_note("fading").unwrap().unwrap();
    board.burst_note(fading, 0).unwrap();
    board.submit_note("fresh").unwrap();
    assert_eq!(repo.raw(NOTES_KEY).unwrap(), r#"["fading","fresh"]"#);

    board.tick(500).unwrap();
    assert_eq!(repo.raw(NOTES_KEY).unwrap(), r#"["fresh"]"#);
}

#[test]
fn note_input_keys_click_for_printable_and_backspace() {
    let repo = MemoryKvRepository::new();
    let (mut board, log) = open_board(&repo);
    for key in ["a", "Backspace", "Shift", "Enter", "é"] {
        board.note_input_key(key);
    }
    assert_eq!(log.cues(), vec![AudioCue::Click; 3]);
}

#[test]
fn counter_at_upper_bound_saturates_instead_of_panicking() {
    let repo = MemoryKvRepository::new();
    repo.put(COUNT_KEY, &u64::MAX.to_string()).unwrap();
    let (mut board, _) = open_board(&repo);
    assert_eq!(board.burst_count(), u64::MAX);

    let id = board.submit_note("x").unwrap().unwrap();
    board.burst_note(id, 0).unwrap();
    assert_eq!(board.burst_count(), u64::MAX);
    assert_eq!(repo.raw(COUNT_KEY).unwrap(), u64::MAX.to_string());
}
