use payloads::{SelectedFile, upload};
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

use crate::contexts::toast::use_toast;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Emits `Some` when a validated file has been read into memory, and
    /// `None` when a selection was rejected (explicit reset).
    pub on_file_select: Callback<Option<SelectedFile>>,
    #[prop_or_default]
    pub disabled: bool,
}

/// File intake for the analyzer: click-to-select with allow-list
/// validation. The accepted formats come from the shared upload contract
/// so the frontend and backend cannot drift apart.
#[function_component]
pub fn FileUpload(props: &Props) -> Html {
    let file_input_ref = use_node_ref();
    let file_name = use_state(|| None::<String>);
    let toast = use_toast();

    let on_file_change = {
        let file_name = file_name.clone();
        let on_file_select = props.on_file_select.clone();
        let file_input_ref = file_input_ref.clone();
        let toast = toast.clone();

        Callback::from(move |e: Event| {
            let file_name = file_name.clone();
            let on_file_select = on_file_select.clone();

            let input: HtmlInputElement = e.target_unchecked_into();
            let file = match input.files().and_then(|files| files.get(0)) {
                Some(f) => f,
                None => return,
            };

            let name = file.name();
            let mime_type = file.type_();

            let validation = upload::validate_file(&name, &mime_type);
            if !validation.is_valid() {
                if let Some(message) = validation.error_message() {
                    toast.error(message);
                }
                // Clear the selection signal entirely
                file_name.set(None);
                if let Some(input) =
                    file_input_ref.cast::<HtmlInputElement>()
                {
                    input.set_value("");
                }
                on_file_select.emit(None);
                return;
            }

            // Read the accepted file into memory
            let reader = FileReader::new().unwrap();
            let reader_clone = reader.clone();
            let display_name = name.clone();

            let onload = Closure::wrap(Box::new(move |_: Event| {
                let result = reader_clone.result().unwrap();
                let array = js_sys::Uint8Array::new(&result);
                let data: Vec<u8> = array.to_vec();

                tracing::debug!(
                    "selected {} ({} bytes)",
                    display_name,
                    data.len()
                );
                file_name.set(Some(display_name.clone()));
                on_file_select.emit(Some(SelectedFile::new(
                    display_name.clone(),
                    mime_type.clone(),
                    data,
                )));
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            reader.read_as_array_buffer(&file).unwrap();
            onload.forget();
        })
    };

    let on_browse_click = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    html! {
        <div class="space-y-3">
            <input
                ref={file_input_ref}
                type="file"
                accept={upload::accept_attr()}
                onchange={on_file_change}
                class="hidden"
                disabled={props.disabled}
            />

            <button
                type="button"
                onclick={on_browse_click}
                disabled={props.disabled}
                class="w-full px-4 py-6 border-2 border-dashed
                       border-neutral-300 dark:border-neutral-600
                       rounded-lg text-center hover:border-neutral-400
                       dark:hover:border-neutral-500 transition-colors
                       cursor-pointer disabled:opacity-50"
            >
                <span class="text-2xl">{"📄"}</span>
                <p class="text-sm text-neutral-600 dark:text-neutral-400 mt-1">
                    {"Clique para selecionar o seu contrato."}
                </p>
                <p class="text-xs text-neutral-500 mt-1">
                    {format!("Formatos aceites: {}", upload::accept_label())}
                </p>
            </button>

            {if let Some(name) = &*file_name {
                html! {
                    <p class="text-sm text-neutral-700 dark:text-neutral-300">
                        {"Ficheiro selecionado: "}
                        <strong>{name}</strong>
                    </p>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
