// src/gui/actions/split.rs
use crate::{file, gui::{app::App, progress::GuiProgress}};

pub fn split(app: &mut App) {
    let Some(table) = app.state.session.table.as_ref() else {
        app.status("Nothing to split");
        logd!("Split: Clicked, but there's nothing to split");
        return;
    };

    let opts = &app.state.options.batch;
    let batches = match table.batches(opts.rows_per_batch) {
        Ok(b) => b,
        Err(e) => {
            loge!("Split: {}", e);
            app.status(format!("Split error: {e}"));
            return;
        }
    };

    logf!(
        "Split: Begin rows={} size={} files={}",
        table.row_count(),
        opts.rows_per_batch,
        batches.len()
    );

    let dir = opts.out_dir.clone();
    let mut prog = GuiProgress::new(&mut app.status);
    if let Err(e) = file::write_batches(&dir, &batches, Some(&mut prog)) {
        app.status(format!("Split error: {e}"));
    }
}
