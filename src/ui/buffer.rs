use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use crate::app::domain::{Message, Selection};

/// Read the whole text of an FLTK buffer.
///
/// `TextBuffer::text()` copies FLTK's `malloc()`'d string but never frees
/// it, so a call per event would leak the buffer size each time. This calls
/// the C API directly and frees the copy.
pub fn buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is the live FLTK buffer owned by `buf`.
    // Fl_Text_Buffer_text returns a null-terminated malloc'd copy (or null),
    // which is read once and released with the matching free().
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}

/// Same as [`buffer_text`] for the bytes `start..end`.
fn buffer_text_range(buf: &TextBuffer, start: i32, end: i32) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text_range(
            buf: *mut std::ffi::c_void,
            start: std::ffi::c_int,
            end: std::ffi::c_int,
        ) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: as in buffer_text; FLTK clamps the range to the buffer.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text_range(inner, start, end);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}

/// Report every edit of `buffer` as a [`Message::Edited`] and keep
/// `style_buffer` the same length as the text.
///
/// Edits made while the returned flag is set are the app's own reloads and
/// are not reported.
pub fn track_edits(buffer: &mut TextBuffer, style_buffer: &TextBuffer, sender: Sender<Message>) -> Rc<Cell<bool>> {
    let muted = Rc::new(Cell::new(false));
    let quiet = muted.clone();
    let reader = buffer.clone();
    let mut style_buf = style_buffer.clone();
    buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
        if quiet.get() || (inserted <= 0 && deleted <= 0) {
            return;
        }
        if deleted > 0 {
            style_buf.remove(pos, pos + deleted);
        }
        let text = if inserted > 0 {
            style_buf.insert(pos, &"A".repeat(inserted as usize));
            buffer_text_range(&reader, pos, pos + inserted)
        } else {
            String::new()
        };
        sender.send(Message::Edited {
            pos: pos.max(0) as usize,
            deleted: deleted.max(0) as usize,
            inserted: text,
        });
    });
    muted
}

/// The editor's caret and selection in document coordinates.
pub fn editor_selection(buf: &TextBuffer, editor: &TextEditor) -> Selection {
    let head = editor.insert_position().max(0) as usize;
    match buf.selection_position() {
        Some((start, end)) if start != end => {
            let (start, end) = (start.max(0) as usize, end.max(0) as usize);
            let anchor = if head == start { end } else { start };
            Selection::new(anchor, head)
        }
        _ => Selection::caret(head),
    }
}

/// Put the document's selection back on the widget.
pub fn apply_selection(buf: &mut TextBuffer, editor: &mut TextEditor, selection: Selection) {
    if selection.is_collapsed() {
        buf.unselect();
    } else {
        buf.select(selection.start() as i32, selection.end() as i32);
    }
    editor.set_insert_position(selection.head as i32);
    editor.show_insert_position();
}
