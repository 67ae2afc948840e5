//! Invoice fraud dashboard screen.

use std::rc::Rc;

use claims_desk::render::{
    DASHBOARD_TITLE, RESULTS_TITLE, classification_rows, shows_results, status_line,
};
use claims_desk::{
    CancellationToken, ClientError, InvoiceApi, Notice, SelectedFile, UploadResponse, UploadState,
    guarded,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::browser::{BrowserClient, read_selected};
use crate::components::{ClassificationTable, FilePicker, TokenInput, UploadButton};
use crate::notice::{NoticeSlot, use_notice_alert};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub upload: UploadState,
    pub notice: NoticeSlot,
    /// Number of the latest pick; reads of earlier picks are dropped.
    pub pick: u32,
    /// The latest pick is still being read into memory.
    pub reading: bool,
}

impl Dashboard {
    /// Upload cannot start while a request is in flight or a file is loading.
    pub fn busy(&self) -> bool {
        self.upload.is_loading() || self.reading
    }
}

pub enum DashboardAction {
    /// A new file was picked; its contents follow in `FileRead`.
    Pick(u32),
    FileRead {
        pick: u32,
        file: Option<SelectedFile>,
    },
    SetToken(String),
    Begin,
    Settle(Result<UploadResponse, ClientError>),
    Notify(Notice),
}

impl Reducible for Dashboard {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::Pick(pick) => {
                next.pick = pick;
                next.reading = true;
            }
            DashboardAction::FileRead { pick, file } => {
                if pick != next.pick {
                    tracing::debug!(pick, latest = next.pick, "dropping stale file read");
                    return self;
                }
                next.reading = false;
                next.upload.select_file(file);
            }
            DashboardAction::SetToken(token) => next.upload.set_token(token),
            DashboardAction::Begin => next.upload.begin(),
            DashboardAction::Settle(result) => {
                let notice = next.upload.settle(result);
                next.notice = next.notice.raise_opt(notice);
            }
            DashboardAction::Notify(notice) => next.notice = next.notice.raise(notice),
        }
        Rc::new(next)
    }
}

#[function_component(InvoiceDashboard)]
pub fn invoice_dashboard() -> Html {
    let state = use_reducer(Dashboard::default);
    let picks = use_mut_ref(|| 0u32);
    let cancel = use_memo((), |_| CancellationToken::new());

    {
        let cancel = cancel.clone();
        use_effect_with((), move |_| move || cancel.cancel());
    }

    use_notice_alert(state.notice);

    let on_token = {
        let state = state.clone();
        Callback::from(move |token: String| {
            state.dispatch(DashboardAction::SetToken(token));
        })
    };

    let on_select = {
        let state = state.clone();
        let cancel = cancel.clone();
        let picks = picks.clone();
        Callback::from(move |e: web_sys::Event| {
            let pick = {
                let mut picks = picks.borrow_mut();
                *picks = picks.wrapping_add(1);
                *picks
            };
            state.dispatch(DashboardAction::Pick(pick));

            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                state.dispatch(DashboardAction::FileRead { pick, file: None });
                return;
            };
            let file = gloo::file::File::from(file);
            let dispatcher = state.dispatcher();
            let cancel = (*cancel).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let selected = match guarded(&cancel, read_selected(&file)).await {
                    Some(Ok(selected)) => Some(selected),
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, file = %file.name(), "could not read file");
                        None
                    }
                    None => return,
                };
                dispatcher.dispatch(DashboardAction::FileRead { pick, file: selected });
            });
        })
    };

    let on_upload = {
        let state = state.clone();
        let cancel = cancel.clone();
        Callback::from(move |_: ()| {
            if state.busy() {
                tracing::debug!("upload ignored while busy");
                return;
            }
            let request = match state.upload.prepare() {
                Ok(request) => request,
                Err(notice) => {
                    tracing::warn!(%notice, "upload not sent");
                    state.dispatch(DashboardAction::Notify(notice));
                    return;
                }
            };
            state.dispatch(DashboardAction::Begin);

            let dispatcher = state.dispatcher();
            let cancel = (*cancel).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = BrowserClient::default();
                if let Some(result) = guarded(&cancel, client.upload_invoice(&request)).await {
                    dispatcher.dispatch(DashboardAction::Settle(result));
                }
            });
        })
    };

    let rows = classification_rows(&state.upload);

    html! {
        <div class="dashboard">
            <h1>{ DASHBOARD_TITLE }</h1>

            <div class="upload-form">
                <TokenInput value={state.upload.auth_token().to_string()} on_change={on_token} />
                <FilePicker {on_select} />
                <UploadButton
                    loading={state.upload.is_loading()}
                    disabled={state.busy()}
                    on_click={on_upload}
                />
            </div>

            if let Some(message) = status_line(&state.upload) {
                <p class="status-message">{ message }</p>
            }

            if shows_results(&state.upload) {
                <div class="results">
                    <h2>{ RESULTS_TITLE }</h2>
                    <ClassificationTable {rows} />
                </div>
            }
        </div>
    }
}
