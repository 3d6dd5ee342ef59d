use std::path::PathBuf;

use chd_app_core::viewmodel::picker_extensions;
use chd_app_core::{Alert, AlertLevel};
use chd_core::{DiscPath, SystemProfile};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

/// Source image, then the output path; `None` if either dialog is cancelled.
pub fn pick_single(system: SystemProfile) -> Option<(PathBuf, PathBuf)> {
    let input = FileDialog::new()
        .set_title("Select Disc Image")
        .add_filter("Disc files", &picker_extensions(system))
        .add_filter("All files", &["*"])
        .pick_file()?;

    let suggested = DiscPath::container_path(&input);
    let mut save = FileDialog::new()
        .set_title("Save CHD as")
        .add_filter("CHD files", &["chd"])
        .set_file_name(DiscPath::display_name(&suggested));
    if let Some(parent) = input.parent() {
        save = save.set_directory(parent);
    }
    let mut output = save.save_file()?;
    if output.extension().is_none() {
        output.set_extension("chd");
    }
    Some((input, output))
}

pub fn pick_folder() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select Folder with Disc Images")
        .pick_folder()
}

pub fn show_alert(alert: &Alert) {
    let level = match alert.level {
        AlertLevel::Info => MessageLevel::Info,
        AlertLevel::Warning => MessageLevel::Warning,
        AlertLevel::Error => MessageLevel::Error,
    };
    MessageDialog::new()
        .set_level(level)
        .set_title(alert.title.as_str())
        .set_description(alert.message.as_str())
        .set_buttons(MessageButtons::Ok)
        .show();
}
