#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::errors::Error;
    use crate::fixtures::DemoSeed;
    use crate::i18n::Locale;
    use crate::portfolios::{FundAllocation, PortfolioError};
    use crate::requests::{RequestError, RequestStatus, RequestType};
    use crate::settings::WorkbenchSettings;
    use crate::state::{AppStore, StateAction, WorkbenchState};
    use crate::termination::TerminationError;

    fn store() -> AppStore {
        AppStore::new(WorkbenchState::from_seed(&DemoSeed, &WorkbenchSettings::default()))
    }

    fn resolve(id: &str, status: RequestStatus) -> StateAction {
        StateAction::RequestStatusChanged {
            request_id: id.to_string(),
            status,
        }
    }

    #[test]
    fn test_terminal_request_cannot_change() {
        let store = store();
        let err = store
            .dispatch(resolve("AI-20240310-099", RequestStatus::Failed))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Request(RequestError::AlreadyResolved {
                status: RequestStatus::Success,
                ..
            })
        ));
    }

    #[test]
    fn test_replaced_funds_must_balance() {
        let store = store();
        let before = store.snapshot().unwrap();
        let err = store
            .dispatch(StateAction::PortfolioFundsReplaced {
                portfolio_id: "P01".to_string(),
                funds: vec![
                    FundAllocation::new("A", dec!(70)),
                    FundAllocation::new("B", dec!(40)),
                ],
                deviation: dec!(0.1),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Portfolio(PortfolioError::UnbalancedFunds { .. })
        ));
        assert_eq!(store.snapshot().unwrap(), before);
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let store = store();
        assert!(store
            .dispatch(StateAction::PortfolioDeviationReset {
                portfolio_id: "P99".to_string(),
                deviation: dec!(0.1),
            })
            .is_err());
        assert!(store
            .dispatch(StateAction::AgreementRemoved {
                agreement_id: "WA-0000".to_string(),
            })
            .is_err());
        assert!(store.dispatch(resolve("NOPE", RequestStatus::Success)).is_err());
    }

    #[test]
    fn test_balance_never_goes_negative() {
        let store = store();
        let balance = store.read(|s| s.balance).unwrap();
        let err = store
            .dispatch(StateAction::BalanceDebited(balance + dec!(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Termination(TerminationError::InsufficientBalance { .. })
        ));
        store.dispatch(StateAction::BalanceDebited(balance)).unwrap();
        assert_eq!(store.read(|s| s.balance).unwrap(), dec!(0));
        assert!(store.dispatch(StateAction::BalanceCredited(dec!(-5))).is_err());
    }

    #[test]
    fn test_dispatch_all_is_atomic() {
        let store = store();
        let before = store.snapshot().unwrap();
        let err = store
            .dispatch_all(vec![
                resolve("AI-20240316-002", RequestStatus::Success),
                StateAction::LocaleSwitched(Locale::En),
                StateAction::AgreementRemoved {
                    agreement_id: "WA-0000".to_string(),
                },
            ])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Termination(TerminationError::AgreementNotFound(_))
        ));
        assert_eq!(store.snapshot().unwrap(), before);
    }

    #[test]
    fn test_dispatch_all_commits_every_action() {
        let store = store();
        store
            .dispatch_all(vec![
                resolve("AI-20240316-002", RequestStatus::Success),
                StateAction::BalanceCredited(dec!(10)),
            ])
            .unwrap();
        let state = store.snapshot().unwrap();
        assert_eq!(
            state.request("AI-20240316-002").map(|r| r.status),
            Some(RequestStatus::Success)
        );
        assert_eq!(state.balance, WorkbenchSettings::default().opening_balance + dec!(10));
    }

    #[test]
    fn test_request_ids_follow_sequence() {
        let store = store();
        let day = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(
            store.next_request_id(RequestType::Termination, day).unwrap(),
            "TM-20240317-008"
        );
        assert_eq!(
            store.next_request_id(RequestType::KycExpired, day).unwrap(),
            "KYC-20240317-008"
        );

        let mut request = store
            .read(|s| s.request("TX-20240316-003").cloned())
            .unwrap()
            .unwrap();
        request.id = store.next_request_id(RequestType::TransferOut, day).unwrap();
        store.dispatch(StateAction::RequestAppended(request.clone())).unwrap();
        assert_eq!(
            store.next_request_id(RequestType::TransferOut, day).unwrap(),
            "TX-20240317-009"
        );
        assert!(matches!(
            store.dispatch(StateAction::RequestAppended(request)).unwrap_err(),
            Error::Request(RequestError::DuplicateId(_))
        ));
    }
}
