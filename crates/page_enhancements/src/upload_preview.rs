//! Drag-and-drop image upload with an inline preview.
//!
//! Clicking the dropzone opens the file picker. A file chosen there or dropped onto the zone is
//! decoded to a `data:` URL and shown in the preview image. Dropped files are also assigned to the
//! file input so they submit with the form.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Dropzone events that take part in drag feedback.
pub enum DropzoneEvent {
    DragEnter,
    DragOver,
    DragLeave,
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Change applied to the dropzone's drag-over class.
pub enum DragClassChange {
    Add,
    Remove,
}

impl DropzoneEvent {
    pub const ALL: [Self; 4] = [Self::DragEnter, Self::DragOver, Self::DragLeave, Self::Drop];

    /// DOM event type name.
    pub fn event_type(self) -> &'static str {
        match self {
            Self::DragEnter => "dragenter",
            Self::DragOver => "dragover",
            Self::DragLeave => "dragleave",
            Self::Drop => "drop",
        }
    }

    pub fn class_change(self) -> DragClassChange {
        match self {
            Self::DragEnter | Self::DragOver => DragClassChange::Add,
            Self::DragLeave | Self::Drop => DragClassChange::Remove,
        }
    }

    /// Whether the event carries files to preview.
    pub fn delivers_files(self) -> bool {
        matches!(self, Self::Drop)
    }
}

/// Returns the first file of a selection; any further files are ignored.
pub fn pick_first<I: IntoIterator>(files: I) -> Option<I::Item> {
    files.into_iter().next()
}

#[cfg(target_arch = "wasm32")]
mod web {
    use catalog_host::{PageSubsystem, UploadConfig};
    use catalog_host_web::read_file_as_data_url;
    use leptos::{logging, spawn_local};
    use wasm_bindgen::JsCast;
    use web_sys::{DataTransfer, DragEvent, File, FileList, HtmlElement, HtmlInputElement};

    use super::{pick_first, DragClassChange, DropzoneEvent};
    use crate::dom::{document, listen};

    /// Upload preview rooted at the dropzone element.
    pub struct UploadPreviewSubsystem {
        config: UploadConfig,
    }

    impl UploadPreviewSubsystem {
        pub fn new(config: UploadConfig) -> Self {
            Self { config }
        }
    }

    #[derive(Clone)]
    struct PreviewTarget {
        preview: Option<HtmlElement>,
        instructions: Option<HtmlElement>,
    }

    impl PreviewTarget {
        fn show(&self, file: File) {
            let target = self.clone();
            spawn_local(async move {
                match read_file_as_data_url(&file).await {
                    Ok(data_url) => target.apply(&data_url),
                    Err(err) => logging::warn!("upload preview: {err}"),
                }
            });
        }

        fn apply(&self, data_url: &str) {
            if let Some(preview) = &self.preview {
                let _ = preview.set_attribute("src", data_url);
                let _ = preview.style().set_property("display", "block");
            }
            if let Some(instructions) = &self.instructions {
                let _ = instructions.style().set_property("display", "none");
            }
        }
    }

    fn first_file(list: Option<FileList>) -> Option<File> {
        let list = list?;
        pick_first((0..list.length()).filter_map(|index| list.get(index)))
    }

    /// Makes `file` the input's selection so it submits with the surrounding form.
    fn assign_to_input(input: &HtmlInputElement, file: &File) -> Result<(), String> {
        let transfer = DataTransfer::new().map_err(|err| format!("{err:?}"))?;
        transfer
            .items()
            .add_with_file(file)
            .map_err(|err| format!("{err:?}"))?;
        input.set_files(transfer.files().as_ref());
        Ok(())
    }

    impl PageSubsystem for UploadPreviewSubsystem {
        type Root = HtmlElement;

        fn name(&self) -> &'static str {
            "upload-preview"
        }

        fn probe(&self) -> Option<HtmlElement> {
            document()?
                .get_element_by_id(&self.config.dropzone_id)?
                .dyn_into::<HtmlElement>()
                .ok()
        }

        fn install(&self, dropzone: HtmlElement) {
            let Some(document) = document() else {
                return;
            };
            let input = document
                .get_element_by_id(&self.config.input_id)
                .and_then(|element| element.dyn_into::<HtmlInputElement>().ok());
            let target = PreviewTarget {
                preview: document
                    .get_element_by_id(&self.config.preview_id)
                    .and_then(|element| element.dyn_into::<HtmlElement>().ok()),
                instructions: dropzone
                    .query_selector(&self.config.instructions_selector)
                    .ok()
                    .flatten()
                    .and_then(|element| element.dyn_into::<HtmlElement>().ok()),
            };

            {
                let input = input.clone();
                listen(&dropzone, "click", move |_| {
                    if let Some(input) = &input {
                        input.click();
                    }
                });
            }

            if let Some(input) = &input {
                let input_for_change = input.clone();
                let target = target.clone();
                listen(input, "change", move |_| {
                    if let Some(file) = first_file(input_for_change.files()) {
                        target.show(file);
                    }
                });
            }

            for kind in DropzoneEvent::ALL {
                let zone = dropzone.clone();
                let input = input.clone();
                let target = target.clone();
                let dragover_class = self.config.dragover_class.clone();
                listen(&dropzone, kind.event_type(), move |ev| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    let classes = zone.class_list();
                    let _ = match kind.class_change() {
                        DragClassChange::Add => classes.add_1(&dragover_class),
                        DragClassChange::Remove => classes.remove_1(&dragover_class),
                    };
                    if !kind.delivers_files() {
                        return;
                    }

                    let Some(file) = ev
                        .dyn_ref::<DragEvent>()
                        .and_then(DragEvent::data_transfer)
                        .and_then(|transfer| first_file(transfer.files()))
                    else {
                        return;
                    };
                    if let Some(input) = &input {
                        if let Err(err) = assign_to_input(input, &file) {
                            logging::warn!("upload preview: could not attach dropped file: {err}");
                        }
                    }
                    target.show(file);
                });
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::UploadPreviewSubsystem;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn enter_and_over_add_the_class_while_leave_and_drop_remove_it() {
        let changes: Vec<(&str, DragClassChange)> = DropzoneEvent::ALL
            .iter()
            .map(|kind| (kind.event_type(), kind.class_change()))
            .collect();
        assert_eq!(
            changes,
            vec![
                ("dragenter", DragClassChange::Add),
                ("dragover", DragClassChange::Add),
                ("dragleave", DragClassChange::Remove),
                ("drop", DragClassChange::Remove),
            ]
        );
    }

    #[test]
    fn only_drop_delivers_files() {
        let delivering: Vec<DropzoneEvent> = DropzoneEvent::ALL
            .into_iter()
            .filter(|kind| kind.delivers_files())
            .collect();
        assert_eq!(delivering, vec![DropzoneEvent::Drop]);
    }

    #[test]
    fn only_the_first_file_is_used() {
        assert_eq!(pick_first(["a.png", "b.png", "c.png"]), Some("a.png"));
        assert_eq!(pick_first(Vec::<&str>::new()), None);
    }
}
