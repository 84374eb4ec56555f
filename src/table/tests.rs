//! Tests for the table component.

use super::*;
use crate::Component;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

fn key(code: KeyCode) -> KeyMsg {
    KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }
}

fn ctrl(c: char) -> KeyMsg {
    KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    }
}

fn space() -> KeyMsg {
    key(KeyCode::Char(' '))
}

/// Name | Keep (checkable) | Size | Done (checkable)
fn checkable_header() -> TableHeader {
    TableHeader::new()
        .column("Name")
        .with(ColumnSpec::new("Keep").checkable())
        .column("Size")
        .with(ColumnSpec::new("Done").checkable())
}

fn table_with(header: TableHeader, multi: bool, rows: &[&[&str]]) -> Model {
    let mut table = Model::new(header, multi);
    table.add_items(rows.iter().map(|&r| TableItem::new(r)));
    table
}

fn order(table: &Model) -> Vec<usize> {
    table.pad().iter_lines().map(Line::item_index).collect()
}

// -----------------------------------------------------------------------------
// Construction and header
// -----------------------------------------------------------------------------

#[test]
fn test_header_round_trips_whatever_the_alignment() {
    let header = TableHeader::new()
        .column("Name")
        .with(ColumnSpec::new("Size").align(Alignment::End))
        .with(ColumnSpec::new("Kind").align(Alignment::Center))
        .with(ColumnSpec::new("Date").align(Alignment::Begin));
    let table = Model::new(header, false);
    assert_eq!(table.header(), vec!["Name", "Size", "Kind", "Date"]);
    assert_eq!(table.headline_markers(), vec!['L', 'R', 'C', 'L']);
    assert_eq!(
        table.encoded_headline(),
        vec!["LName", "RSize", "CKind", "LDate"]
    );
    assert!(table.has_headline());
}

#[test]
fn test_single_selected_item_becomes_current() {
    let mut table = Model::new(TableHeader::from_labels(&["Name", "Size"]), false);
    table.add_item(TableItem::new(&["foo", "10"]).with_selected(true), false);
    assert_eq!(table.current_item(), Some(0));
    assert_eq!(table.header(), vec!["Name", "Size"]);
    assert_eq!(table.current_item_ref().map(TableItem::label), Some("foo"));
}

#[test]
fn test_multi_selection_adds_tag_column() {
    let table = table_with(
        TableHeader::from_labels(&["Name", "Size"]),
        true,
        &[&["a", "1"], &["b", "2"]],
    );
    assert_eq!(table.encoded_headline().len(), 3);
    assert_eq!(table.header(), vec!["Name", "Size"]);
    let line = table.pad().line(0).unwrap();
    assert_eq!(line.cells().len(), 3);
    assert_eq!(line.cell(0), Some(&PadCell::Tag(false)));
}

#[test]
fn test_empty_header_has_no_headline() {
    let table = Model::new(TableHeader::from_labels(&["", ""]), false);
    assert!(!table.has_headline());
    assert_eq!(table.header(), vec!["", ""]);
}

#[test]
fn test_set_header_rebuilds_lines() {
    let mut table = table_with(checkable_header(), true, &[&["vim", "", "10", ""]]);
    table.set_header(&["Name", "Size"]).unwrap();
    assert_eq!(table.header(), vec!["Name", "Size"]);
    assert_eq!(table.encoded_headline(), vec!["L", "LName", "LSize"]);
    assert!(!table.checkable(0));
    assert!(!table.pad().column_selection());

    let line = table.pad().line(0).unwrap();
    assert_eq!(line.cells().len(), 3);
    assert_eq!(line.cell(2), Some(&PadCell::Text(String::new())));
    assert!(table.items()[0].cells().iter().all(|c| !c.checkable));
}

#[test]
fn test_set_alignment_changes_only_the_marker() {
    let mut table = Model::new(TableHeader::from_labels(&["Name", "Size"]), true);
    table.set_alignment(1, Alignment::End);
    assert_eq!(table.encoded_headline(), vec!["L", "LName", "RSize"]);
    assert_eq!(table.header(), vec!["Name", "Size"]);
}

#[test]
fn test_items_are_padded_to_the_column_count() {
    let table = table_with(
        TableHeader::from_labels(&["A", "B", "C"]),
        false,
        &[&["only"], &["1", "2", "3", "extra"]],
    );
    assert_eq!(table.pad().line(0).unwrap().cells().len(), 3);
    assert_eq!(table.pad().line(1).unwrap().cells().len(), 3);
}

#[test]
fn test_checkable_cells_are_marked() {
    let mut table = Model::new(checkable_header(), false);
    table.add_item(
        TableItem::from_cells(vec![
            Cell::new("vim"),
            Cell::new("").with_checked(true),
            Cell::new("10"),
            Cell::new(""),
        ]),
        false,
    );
    let item = table.item(0).unwrap();
    assert!(item.cell(1).unwrap().checkable);
    assert!(!item.cell(0).unwrap().checkable);
    let line = table.pad().line(0).unwrap();
    assert_eq!(line.cell(1), Some(&PadCell::Tag(true)));
    assert_eq!(line.cell(3), Some(&PadCell::Tag(false)));
    assert!(table.pad().column_selection());
}

// -----------------------------------------------------------------------------
// Items
// -----------------------------------------------------------------------------

#[test]
fn test_add_items_redraws_once() {
    let mut table = Model::new(TableHeader::from_labels(&["Name"]), false);
    table.add_items(vec![
        TableItem::new(&["a"]),
        TableItem::new(&["b"]),
        TableItem::new(&["c"]),
    ]);
    assert_eq!(table.redraw_count(), 1);
    table.add_item(TableItem::new(&["d"]), false);
    assert_eq!(table.redraw_count(), 2);
    table.add_item(TableItem::new(&["e"]), true);
    assert_eq!(table.redraw_count(), 2);
    assert_eq!(table.items_count(), 5);
    assert_eq!(table.item(4).map(TableItem::index), Some(4));
}

#[test]
fn test_delete_all_items() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name"]),
        false,
        &[&["a"], &["b"]],
    );
    table.delete_all_items();
    assert_eq!(table.items_count(), 0);
    assert_eq!(table.pad().lines(), 0);
    assert_eq!(table.current_item(), None);
}

#[test]
fn test_single_selection_keeps_one_selected_item() {
    let mut table = Model::new(TableHeader::from_labels(&["Name"]), false);
    table.add_items(vec![
        TableItem::new(&["a"]).with_selected(true),
        TableItem::new(&["b"]).with_selected(true),
    ]);
    assert_eq!(table.selected_items().len(), 1);
    assert_eq!(table.selected_item().map(TableItem::index), Some(1));
    assert_eq!(table.current_item(), Some(1));
}

#[test]
fn test_cell_changed() {
    let mut table = table_with(checkable_header(), false, &[&["vim", "", "10", ""]]);
    table.cell_changed(0, 2, "20");
    assert_eq!(
        table.pad().line(0).unwrap().cell(2),
        Some(&PadCell::Text("20".into()))
    );
    assert_eq!(table.item(0).unwrap().cell(2).unwrap().label, "20");

    table.cell_changed(0, 1, "x");
    assert_eq!(table.pad().line(0).unwrap().cell(1), Some(&PadCell::Tag(false)));

    let redraws = table.redraw_count();
    table.cell_changed(7, 0, "nope");
    table.cell_changed(0, 9, "nope");
    assert_eq!(table.redraw_count(), redraws);
}

// -----------------------------------------------------------------------------
// Selection
// -----------------------------------------------------------------------------

#[test]
fn test_deselecting_current_item_clears_selection() {
    let mut table = Model::new(TableHeader::from_labels(&["Name", "Size"]), false);
    table.add_items(vec![
        TableItem::new(&["a", "1"]),
        TableItem::new(&["b", "2"]).with_selected(true),
    ]);
    table.select_item(1, false);
    assert!(table.selected_items().is_empty());
    assert_eq!(table.current_item(), Some(1));

    table.select_item(1, false);
    assert!(table.selected_items().is_empty());
    assert_eq!(table.current_item(), Some(1));
}

#[test]
fn test_selecting_highlights_and_deselects_others() {
    let mut table = Model::new(TableHeader::from_labels(&["Name"]), false);
    table.add_items(vec![
        TableItem::new(&["a"]).with_selected(true),
        TableItem::new(&["b"]),
    ]);
    table.select_item(1, true);
    assert_eq!(table.current_item(), Some(1));
    assert!(!table.item(0).unwrap().selected());
    assert!(table.item(1).unwrap().selected());
}

#[test]
fn test_multi_tag_toggles_even_times_restore() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name", "Size"]),
        true,
        &[&["a", "1"], &["b", "2"]],
    );
    for n in 1..=4 {
        table.toggle_current_item();
        let on = n % 2 == 1;
        assert_eq!(table.item(0).unwrap().selected(), on);
        assert_eq!(table.pad().line(0).unwrap().cell(0), Some(&PadCell::Tag(on)));
    }
    assert!(table.selected_items().is_empty());
}

#[test]
fn test_deselect_all_clears_tags_and_keeps_highlight() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name"]),
        true,
        &[&["a"], &["b"]],
    );
    table.select_item(0, true);
    table.select_item(1, true);
    assert_eq!(table.selected_items().len(), 2);
    table.deselect_all_items();
    assert!(table.selected_items().is_empty());
    assert!(table
        .pad()
        .iter_lines()
        .all(|l| l.cell(0) == Some(&PadCell::Tag(false))));
    assert_eq!(table.current_item(), Some(1));
}

#[test]
fn test_select_current_item_does_not_move() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name"]),
        false,
        &[&["a"], &["b"]],
    );
    table.set_current_item(1);
    table.select_current_item();
    assert_eq!(table.current_item(), Some(1));
    assert!(table.item(1).unwrap().selected());
}

#[test]
#[should_panic(expected = "no such item")]
fn test_select_unknown_item_panics() {
    let mut table = table_with(TableHeader::from_labels(&["Name"]), false, &[&["a"]]);
    table.select_item(3, true);
}

#[test]
fn test_try_select_item_reports_unknown_item() {
    let mut table = Model::new(TableHeader::from_labels(&["Name"]), false);
    assert_eq!(table.try_select_item(0, true), Err(TableError::NoSuchItem(0)));
}

// -----------------------------------------------------------------------------
// Keys
// -----------------------------------------------------------------------------

#[test]
fn test_column_jumps_land_on_checkable_columns() {
    let mut table = table_with(checkable_header(), false, &[&["vim", "", "10", ""]]);
    assert_eq!(table.pad().cur_pos().column, 0);

    table.handle_key(&ctrl('n'));
    assert_eq!(table.pad().cur_pos().column, 1);
    table.handle_key(&ctrl('n'));
    assert_eq!(table.pad().cur_pos().column, 3);
    table.handle_key(&ctrl('n'));
    assert_eq!(table.pad().cur_pos().column, 3);

    table.handle_key(&ctrl('p'));
    assert_eq!(table.pad().cur_pos().column, 1);
    // column 0 is plain text in single selection
    table.handle_key(&ctrl('p'));
    assert_eq!(table.pad().cur_pos().column, 1);
}

#[test]
fn test_prev_column_reaches_tag_column_in_multi_selection() {
    let mut table = table_with(checkable_header(), true, &[&["vim", "", "10", ""]]);
    table.handle_key(&ctrl('n'));
    assert_eq!(table.pad().cur_pos().column, 2);
    table.handle_key(&ctrl('p'));
    assert_eq!(table.pad().cur_pos().column, 0);
}

#[test]
fn test_column_jumps_need_rows() {
    let mut table = Model::new(checkable_header(), false);
    table.handle_key(&ctrl('n'));
    assert_eq!(table.pad().cur_pos().column, 0);
}

#[test]
fn test_activate_on_checkable_column_reports_value_change() {
    let mut table = table_with(checkable_header(), false, &[&["vim", "", "10", ""]])
        .with_notify(true);
    table.handle_key(&ctrl('n'));
    assert_eq!(table.handle_key(&space()), TableEvent::ValueChanged);
    assert!(table.item(0).unwrap().cell(1).unwrap().checked);
    assert_eq!(table.pad().line(0).unwrap().cell(1), Some(&PadCell::Tag(true)));
    assert!(!table.item(0).unwrap().selected());

    assert_eq!(table.handle_key(&key(KeyCode::Enter)), TableEvent::ValueChanged);
    assert!(!table.item(0).unwrap().cell(1).unwrap().checked);
}

#[test]
fn test_activate_on_plain_column() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name"]),
        false,
        &[&["a"], &["b"]],
    );
    assert_eq!(table.handle_key(&key(KeyCode::Enter)), TableEvent::None);
    table.set_notify(true);
    assert_eq!(table.handle_key(&key(KeyCode::Enter)), TableEvent::Activated);

    let mut empty = Model::new(TableHeader::from_labels(&["Name"]), false).with_notify(true);
    assert_eq!(empty.handle_key(&key(KeyCode::Enter)), TableEvent::None);
}

#[test]
fn test_activate_in_multi_selection_toggles_row_not_cell() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name", "Size"]),
        true,
        &[&["a", "1"], &["b", "2"]],
    )
    .with_notify(true);
    assert_eq!(table.handle_key(&space()), TableEvent::None);
    assert!(table.item(0).unwrap().selected());
    let line = table.pad().line(0).unwrap();
    assert_eq!(line.cell(0), Some(&PadCell::Tag(true)));
    assert_eq!(line.cell(1), Some(&PadCell::Text("a".into())));

    table.handle_key(&space());
    assert!(!table.item(0).unwrap().selected());
}

#[test]
fn test_cursor_moves_select_in_single_mode() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name"]),
        false,
        &[&["a"], &["b"], &["c"]],
    )
    .with_notify(true);
    assert_eq!(table.handle_key(&key(KeyCode::Down)), TableEvent::None);
    assert_eq!(table.current_item(), Some(1));
    assert_eq!(table.selected_item().map(TableItem::index), Some(1));

    table.set_immediate_mode(true);
    assert_eq!(
        table.handle_key(&key(KeyCode::End)),
        TableEvent::SelectionChanged
    );
    assert_eq!(table.selected_item().map(TableItem::index), Some(2));
    assert_eq!(table.handle_key(&key(KeyCode::Down)), TableEvent::None);
}

#[test]
fn test_cursor_moves_do_not_select_in_multi_mode() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name"]),
        true,
        &[&["a"], &["b"]],
    )
    .with_immediate_mode(true);
    assert!(table.notify());
    assert_eq!(
        table.handle_key(&key(KeyCode::Down)),
        TableEvent::SelectionChanged
    );
    assert!(table.selected_items().is_empty());
}

#[test]
fn test_type_ahead_jumps_to_matching_row() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name"]),
        false,
        &[&["apple"], &["banana"], &["cherry"]],
    );
    table.handle_key(&key(KeyCode::Char('c')));
    assert_eq!(table.current_item(), Some(2));
    assert!(table.set_item_by_key('B'));
    assert_eq!(table.current_item(), Some(1));
    assert!(!table.set_item_by_key('z'));
}

#[test]
fn test_disabled_table_ignores_keys() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name"]),
        false,
        &[&["a"], &["b"]],
    )
    .with_notify(true);
    table.set_enabled(false);
    assert_eq!(table.handle_key(&key(KeyCode::Down)), TableEvent::None);
    assert_eq!(table.current_item(), Some(0));
    assert!(!table.is_enabled());
}

// -----------------------------------------------------------------------------
// Sorting
// -----------------------------------------------------------------------------

fn sizes_table() -> Model {
    table_with(
        TableHeader::from_labels(&["Name", "Size"]),
        false,
        &[&["a", "1"], &["b", "3"], &["c", "2"]],
    )
}

#[test]
fn test_sort_menu_sorts_descending() {
    let mut table = sizes_table();
    assert_eq!(table.handle_key(&ctrl('o')), TableEvent::None);
    assert!(table.is_menu_open());
    let labels: Vec<&str> = table
        .menu()
        .unwrap()
        .items()
        .iter()
        .map(|i| i.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Name", "Size"]);

    // keys go to the menu while it is open
    table.handle_key(&key(KeyCode::Down));
    assert_eq!(table.current_item(), Some(0));
    table.handle_key(&key(KeyCode::Enter));

    assert!(!table.is_menu_open());
    assert_eq!(
        table.sort_order(),
        Some(SortOrder {
            column: 1,
            descending: true
        })
    );
    assert_eq!(order(&table), vec![1, 2, 0]);
    assert_eq!(table.current_item(), Some(0));
}

#[test]
fn test_sort_menu_indices_are_physical_in_multi_mode() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name", "Size"]),
        true,
        &[&["a", "1"]],
    );
    table.handle_key(&ctrl('o'));
    let indices: Vec<usize> = table
        .menu()
        .unwrap()
        .items()
        .iter()
        .map(|i| i.index)
        .collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn test_sort_menu_dismissed() {
    let mut table = sizes_table();
    table.handle_key(&ctrl('o'));
    table.handle_key(&key(KeyCode::Esc));
    assert!(!table.is_menu_open());
    assert_eq!(table.sort_order(), None);
    assert_eq!(order(&table), vec![0, 1, 2]);
}

#[test]
fn test_sort_key_ignored_while_sorting_is_pinned() {
    let mut table = sizes_table().with_keep_sorting(true).with_notify(true);
    assert_eq!(table.handle_key(&ctrl('o')), TableEvent::None);
    assert!(!table.is_menu_open());
    assert_eq!(table.sort_order(), None);
    assert_eq!(order(&table), vec![0, 1, 2]);
    assert!(table.items().iter().all(|i| !i.selected()));
}

#[test]
fn test_numeric_sort_strategy() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name", "Size"]),
        false,
        &[&["a", "9"], &["b", "10"], &["c", "100"]],
    )
    .with_sort_strategy(NumericSort);
    table.handle_key(&ctrl('o'));
    table.handle_key(&key(KeyCode::Down));
    table.handle_key(&key(KeyCode::Enter));
    assert_eq!(order(&table), vec![2, 1, 0]);
}

// -----------------------------------------------------------------------------
// Widget
// -----------------------------------------------------------------------------

#[test]
fn test_preferred_size() {
    let mut table = table_with(
        TableHeader::from_labels(&["Name", "Size"]),
        false,
        &[&["apple", "10"]],
    );
    assert_eq!(table.preferred_width(), DEFAULT_SIZE.width);
    assert_eq!(table.preferred_height(), DEFAULT_SIZE.height);

    table.set_big_list(true);
    assert_eq!(table.preferred_width(), 5 + 1 + 4 + 2);
    assert_eq!(table.preferred_height(), 2 + 2);
}

#[test]
fn test_size_sets_visible_rows() {
    let mut table = Model::new(TableHeader::from_labels(&["Name"]), false).with_size(30, 10);
    assert_eq!(table.pad().visible_rows(), 9);
    table.set_label("Files");
    assert_eq!(table.pad().visible_rows(), 8);
    table.set_size(30, 4);
    assert_eq!(table.pad().visible_rows(), 2);
    assert_eq!(table.size(), Size::new(30, 4));
}

#[test]
fn test_view_renders_rows() {
    let table = table_with(
        TableHeader::new()
            .column("Name")
            .with(ColumnSpec::new("Size").align(Alignment::End)),
        true,
        &[&["apple", "10"], &["kiwi", "2"]],
    )
    .with_label("Fruit");
    let plain = lipgloss_extras::lipgloss::strip_ansi(&table.view());
    let rows: Vec<&str> = plain.lines().collect();
    assert_eq!(
        rows,
        vec![
            "Fruit",
            "    Name  Size",
            "[ ] apple   10",
            "[ ] kiwi     2"
        ]
    );
}

#[test]
fn test_view_shows_sort_menu_and_empty_table() {
    let mut table = sizes_table().with_size(40, 10);
    table.handle_key(&ctrl('o'));
    let plain = lipgloss_extras::lipgloss::strip_ansi(&table.view());
    assert!(plain.contains("Sort by"));

    let empty = Model::new(TableHeader::from_labels(&["Name"]), false);
    let plain = lipgloss_extras::lipgloss::strip_ansi(&empty.view());
    assert!(plain.contains("No items."));
}

#[test]
fn test_focus() {
    let mut table = Model::default();
    assert!(!table.focused());
    assert!(table.focus().is_none());
    assert!(table.focused());
    table.blur();
    assert!(!table.focused());
}

#[test]
fn test_ids_are_unique() {
    let a = Model::default();
    let b = Model::default();
    assert_ne!(a.id(), b.id());
}

#[tokio::test]
async fn test_update_emits_event_message() {
    let mut table = table_with(TableHeader::from_labels(&["Name"]), false, &[&["a"]])
        .with_notify(true);

    let unfocused = table.update(Box::new(key(KeyCode::Enter)) as Msg);
    assert!(unfocused.is_none());

    table.focus();
    let cmd = table
        .update(Box::new(key(KeyCode::Enter)) as Msg)
        .expect("activation produces a command");
    let msg = cmd.await.expect("command yields a message");
    let event = msg
        .downcast_ref::<TableEventMsg>()
        .expect("table event message");
    assert_eq!(
        *event,
        TableEventMsg {
            id: table.id(),
            event: TableEvent::Activated
        }
    );

    assert!(table.update(Box::new("not a key") as Msg).is_none());
}
