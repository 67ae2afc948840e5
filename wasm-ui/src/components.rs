//! UI components shared by the two screens.

use claims_desk::render::{
    CLAIM_HEADERS, CLASSIFICATION_HEADERS, ClaimRow, ClassificationRow, upload_button_label,
};
use claims_desk::Tone;
use yew::prelude::*;

/// Bearer token text field.
#[derive(Properties, PartialEq)]
pub struct TokenInputProps {
    pub value: String,
    pub on_change: Callback<String>,
}

#[function_component(TokenInput)]
pub fn token_input(props: &TokenInputProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <input
            type="text"
            class="token-input"
            placeholder="Enter JWT Token"
            value={props.value.clone()}
            oninput={on_input}
            spellcheck="false"
        />
    }
}

/// File picker. Emits the raw change event; reading the file is the
/// screen's job.
#[derive(Properties, PartialEq)]
pub struct FilePickerProps {
    pub on_select: Callback<web_sys::Event>,
}

#[function_component(FilePicker)]
pub fn file_picker(props: &FilePickerProps) -> Html {
    let on_change = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: web_sys::Event| {
            on_select.emit(e);
        })
    };

    html! {
        <input type="file" class="file-input" accept=".csv" onchange={on_change} />
    }
}

/// Upload trigger, disabled while a request is in flight or a file is
/// still loading.
#[derive(Properties, PartialEq)]
pub struct UploadButtonProps {
    pub loading: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub on_click: Callback<()>,
}

#[function_component(UploadButton)]
pub fn upload_button(props: &UploadButtonProps) -> Html {
    let on_click = {
        let on_click = props.on_click.clone();
        Callback::from(move |_| {
            on_click.emit(());
        })
    };

    html! {
        <button class="upload-button" onclick={on_click} disabled={props.loading || props.disabled}>
            { upload_button_label(props.loading) }
        </button>
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Alert => "alert",
        Tone::Normal => "normal",
    }
}

#[derive(Properties, PartialEq)]
pub struct ClassificationTableProps {
    pub rows: Vec<ClassificationRow>,
}

#[function_component(ClassificationTable)]
pub fn classification_table(props: &ClassificationTableProps) -> Html {
    html! {
        <table class="results-table">
            <thead>
                <tr>
                    { for CLASSIFICATION_HEADERS.iter().map(|h| html! { <th>{ *h }</th> }) }
                </tr>
            </thead>
            <tbody>
                { for props.rows.iter().map(|row| html! {
                    <tr key={row.invoice_number}>
                        <td>{ row.invoice_number }</td>
                        <td class={classes!("classification", tone_class(row.tone))}>
                            { row.label.clone() }
                        </td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClaimsTableProps {
    pub rows: Vec<ClaimRow>,
}

#[function_component(ClaimsTable)]
pub fn claims_table(props: &ClaimsTableProps) -> Html {
    html! {
        <table class="claims-table">
            <thead>
                <tr>
                    { for CLAIM_HEADERS.iter().map(|h| html! { <th>{ *h }</th> }) }
                </tr>
            </thead>
            <tbody>
                { for props.rows.iter().map(|row| html! {
                    <tr key={row.id.clone()}>
                        <td>{ row.id.clone() }</td>
                        <td>{ row.patient_name.clone() }</td>
                        <td>{ row.amount.clone() }</td>
                        <td>{ row.status.clone() }</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_classes() {
        assert_eq!(tone_class(Tone::Alert), "alert");
        assert_eq!(tone_class(Tone::Normal), "normal");
    }
}
