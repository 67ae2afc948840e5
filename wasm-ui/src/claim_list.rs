//! Processed-claims screen.

use std::rc::Rc;

use claims_desk::render::{CLAIMS_PAGE_TITLE, CLAIMS_TITLE, claim_rows};
use claims_desk::{
    CancellationToken, ClaimRecord, ClaimsApi, ClaimsState, ClientConfig, ClientError,
    FailurePolicy, guarded,
};
use yew::prelude::*;

use crate::browser::BrowserClient;
use crate::components::ClaimsTable;
use crate::notice::{NoticeSlot, use_notice_alert};

#[derive(Debug, Clone, PartialEq)]
pub struct ClaimList {
    pub claims: ClaimsState,
    pub policy: FailurePolicy,
    pub notice: NoticeSlot,
}

impl ClaimList {
    fn new(config: &ClientConfig) -> Self {
        Self {
            claims: ClaimsState::new(),
            policy: config.claims_failure,
            notice: NoticeSlot::default(),
        }
    }
}

pub enum ClaimListAction {
    Begin,
    Settle(Result<Vec<ClaimRecord>, ClientError>),
}

impl Reducible for ClaimList {
    type Action = ClaimListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ClaimListAction::Begin => next.claims.begin(),
            ClaimListAction::Settle(result) => {
                let notice = next.claims.settle(result, next.policy);
                next.notice = next.notice.raise_opt(notice);
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq, Clone, Copy, Default)]
pub struct ClaimsProps {
    /// Raise an alert when the fetch fails instead of showing an empty list.
    #[prop_or_default]
    pub notify_on_error: bool,
}

impl ClaimsProps {
    fn config(&self) -> ClientConfig {
        ClientConfig::default().with_claims_failure(FailurePolicy::from_notify(self.notify_on_error))
    }
}

/// Page shell around the claims table.
#[function_component(ClaimsApp)]
pub fn claims_app(props: &ClaimsProps) -> Html {
    html! {
        <div class="claims-app">
            <header>
                <h1>{ CLAIMS_PAGE_TITLE }</h1>
            </header>
            <ClaimsView notify_on_error={props.notify_on_error} />
        </div>
    }
}

/// Fetches the claims once when mounted.
#[function_component(ClaimsView)]
pub fn claims_view(props: &ClaimsProps) -> Html {
    let config = props.config();
    let state = use_reducer(move || ClaimList::new(&config));

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let cancel = CancellationToken::new();
            dispatcher.dispatch(ClaimListAction::Begin);

            let task_cancel = cancel.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = BrowserClient::default();
                if let Some(result) = guarded(&task_cancel, client.fetch_claims()).await {
                    dispatcher.dispatch(ClaimListAction::Settle(result));
                }
            });

            move || cancel.cancel()
        });
    }

    use_notice_alert(state.notice);

    let rows = claim_rows(state.claims.claims());

    html! {
        <div class="claims">
            <h2>{ CLAIMS_TITLE }</h2>
            <ClaimsTable {rows} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims_desk::{ClaimId, Notice};
    use rust_decimal::Decimal;

    fn reduce(state: ClaimList, action: ClaimListAction) -> ClaimList {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn claim() -> ClaimRecord {
        ClaimRecord {
            id: ClaimId::Number(1),
            patient_name: Some("A".to_string()),
            amount: Some(Decimal::from(10).into()),
            status: Some("paid".to_string()),
        }
    }

    #[test]
    fn test_loaded_list() {
        let state = ClaimList::new(&ClientConfig::default());
        let state = reduce(state, ClaimListAction::Begin);
        assert!(state.claims.is_loading());

        let state = reduce(state, ClaimListAction::Settle(Ok(vec![claim()])));

        assert!(!state.claims.is_loading());
        assert_eq!(claim_rows(state.claims.claims())[0].cells(), ["1", "A", "10", "paid"]);
    }

    #[test]
    fn test_default_failure_is_silent() {
        let state = ClaimList::new(&ClaimsProps::default().config());
        let state = reduce(
            state,
            ClaimListAction::Settle(Err(ClientError::Network("refused".to_string()))),
        );

        assert!(state.claims.claims().is_empty());
        assert_eq!(state.notice.current(), None);
    }

    #[test]
    fn test_notify_policy_raises_notice() {
        let props = ClaimsProps { notify_on_error: true };
        let state = reduce(
            ClaimList::new(&props.config()),
            ClaimListAction::Settle(Err(ClientError::Network("refused".to_string()))),
        );

        assert_eq!(state.notice.current(), Some(Notice::ClaimsUnavailable));
    }
}
