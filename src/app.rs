//! Dropzone Demo App
//!
//! Single page with a full-screen image dropzone over some content.

use leptos::prelude::*;

use leptos_dropzone::{mime, AcceptList, DropzoneStatus, FullScreenDropzone};

/// Name and size of a dropped file, detached from the DOM handle
#[derive(Clone, Debug, PartialEq)]
struct DroppedFile {
    name: String,
    size: f64,
}

#[component]
pub fn App() -> impl IntoView {
    let (files, set_files) = signal(Vec::<DroppedFile>::new());
    let (disabled, set_disabled) = signal(false);

    let on_drop = move |dropped: Vec<web_sys::File>| {
        web_sys::console::log_1(&format!("dropped {} file(s)", dropped.len()).into());
        set_files.update(|all| {
            all.extend(dropped.iter().map(|file| DroppedFile {
                name: file.name(),
                size: file.size(),
            }));
        });
    };

    // Format size
    let format_size = |size: f64| {
        if size < 1024.0 {
            format!("{size} B")
        } else if size < 1024.0 * 1024.0 {
            format!("{:.1} KB", size / 1024.0)
        } else {
            format!("{:.1} MB", size / (1024.0 * 1024.0))
        }
    };

    view! {
        <main class="demo-layout">
            <h1>"Image dropzone"</h1>
            <p>"Drag image files anywhere onto this page."</p>

            <label class="disable-toggle">
                <input
                    type="checkbox"
                    prop:checked=disabled
                    on:change=move |ev| set_disabled.set(event_target_checked(&ev))
                />
                "Disable dropzone"
            </label>

            <ul class="dropped-files">
                {move || {
                    files
                        .get()
                        .into_iter()
                        .map(|file| {
                            view! { <li>{file.name} " (" {format_size(file.size)} ")"</li> }
                        })
                        .collect_view()
                }}
            </ul>

            <FullScreenDropzone
                accept=AcceptList::from(mime::IMAGES)
                disabled=disabled
                on_drop=on_drop
                children=move |status: DropzoneStatus| {
                    view! {
                        <div class="drop-message">
                            <p>
                                {if status.rejected {
                                    "Only image files are accepted"
                                } else {
                                    "Drop images to add them"
                                }}
                            </p>
                        </div>
                    }
                }
            />
        </main>
    }
}
