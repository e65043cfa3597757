//! Benchmarks for multi-cursor edits over a rope surface
//!
//! Run with: cargo bench multi_cursor

use quill::editable::{CursorSet, MultiCursorEditor, RopeSurface, TextRange};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// One caret at the end of every line of a `lines`-line document
fn editor_with_line_carets(lines: usize) -> MultiCursorEditor<RopeSurface> {
    let line = "The quick brown fox jumps over the lazy dog.\n";
    let text = line.repeat(lines);
    let carets = (1..=lines).map(|i| TextRange::caret(i * line.len() - 1));

    let mut editor = MultiCursorEditor::new(RopeSurface::from_text(&text));
    editor.set_cursors(CursorSet::from_ranges(carets));
    editor
}

// ============================================================================
// Insert
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn insert_char_at_line_ends(bencher: divan::Bencher, lines: usize) {
    bencher
        .with_inputs(|| editor_with_line_carets(lines))
        .bench_local_values(|mut editor| {
            editor.insert(divan::black_box(";"));
            editor
        });
}

// ============================================================================
// Delete backward
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn delete_backward_at_line_ends(bencher: divan::Bencher, lines: usize) {
    bencher
        .with_inputs(|| editor_with_line_carets(lines))
        .bench_local_values(|mut editor| {
            editor.delete_backward();
            editor
        });
}

// ============================================================================
// Cursor set
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn add_cursors(count: usize) {
    let set = (0..count).fold(CursorSet::new(), |set, i| set.add_cursor(i * 3));
    divan::black_box(set.all_selections());
}
