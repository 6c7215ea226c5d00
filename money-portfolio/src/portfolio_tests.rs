//! Portfolio unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use exchange_rates::{Bank, Currency, CurrencyPair, ExchangeError};
    use money_types::{ExchangeRateProvider, Money};

    use crate::Portfolio;

    /// Rate source that records every conversion it is asked for.
    pub struct RecordingProvider {
        rates: HashMap<CurrencyPair, f64>,
        requested: Mutex<Vec<CurrencyPair>>,
    }

    impl RecordingProvider {
        pub fn new(rates: &[(Currency, Currency, f64)]) -> Self {
            Self {
                rates: rates
                    .iter()
                    .map(|(from, to, rate)| (CurrencyPair::new(*from, *to), *rate))
                    .collect(),
                requested: Mutex::new(Vec::new()),
            }
        }

        pub fn requested(&self) -> Vec<CurrencyPair> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl ExchangeRateProvider for RecordingProvider {
        fn rate(&self, from: Currency, to: Currency) -> Option<f64> {
            if from == to {
                return Some(1.0);
            }
            self.rates.get(&CurrencyPair::new(from, to)).copied()
        }

        fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64, ExchangeError> {
            self.requested
                .lock()
                .unwrap()
                .push(CurrencyPair::new(from, to));
            self.rate(from, to)
                .map(|rate| amount * rate)
                .ok_or(ExchangeError::MissingExchangeRate { from, to })
        }
    }

    fn portfolio(holdings: &[(f64, Currency)]) -> Portfolio {
        holdings
            .iter()
            .map(|(amount, currency)| Money::new(*amount, *currency))
            .collect()
    }

    #[test]
    fn test_empty_portfolio_evaluates_to_zero() {
        let total = Portfolio::new()
            .evaluate(Currency::KRW, &Bank::new())
            .unwrap();
        assert_eq!(total, Money::zero(Currency::KRW));
    }

    #[test]
    fn test_add_keeps_duplicates() {
        let mut portfolio = Portfolio::new();
        portfolio.add(Money::new(5.0, Currency::USD));
        portfolio.add(Money::new(5.0, Currency::USD));
        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio.holdings()[0], portfolio.holdings()[1]);
    }

    #[test]
    fn test_evaluate_converts_each_holding() {
        let provider = RecordingProvider::new(&[(Currency::EUR, Currency::USD, 1.2)]);
        let total = portfolio(&[(10.0, Currency::EUR), (5.0, Currency::USD)])
            .evaluate(Currency::USD, &provider)
            .unwrap();

        assert_eq!(total.currency(), Currency::USD);
        assert_relative_eq!(total.amount(), 17.0);
        assert_eq!(
            provider.requested(),
            vec![
                CurrencyPair::new(Currency::EUR, Currency::USD),
                CurrencyPair::new(Currency::USD, Currency::USD),
            ]
        );
    }

    #[test]
    fn test_evaluate_fails_fast_on_first_missing_rate() {
        let provider = RecordingProvider::new(&[]);
        let result = portfolio(&[
            (1.0, Currency::USD),
            (2.0, Currency::EUR),
            (3.0, Currency::GBP),
        ])
        .evaluate(Currency::KRW, &provider);

        assert_eq!(
            result,
            Err(ExchangeError::MissingExchangeRate {
                from: Currency::USD,
                to: Currency::KRW,
            })
        );
        assert_eq!(provider.requested().len(), 1);
    }

    #[test]
    fn test_missing_rates_lists_each_pair_once() {
        let bank = Bank::create(Currency::EUR, Currency::KRW, 1400.0);
        let missing = portfolio(&[
            (1.0, Currency::USD),
            (2.0, Currency::EUR),
            (3.0, Currency::GBP),
            (4.0, Currency::USD),
            (5.0, Currency::KRW),
        ])
        .missing_rates(Currency::KRW, &bank);

        assert_eq!(
            missing,
            vec![
                CurrencyPair::new(Currency::USD, Currency::KRW),
                CurrencyPair::new(Currency::GBP, Currency::KRW),
            ]
        );
    }

    #[test]
    fn test_missing_rates_empty_when_evaluable() {
        let bank = Bank::create(Currency::EUR, Currency::USD, 1.2);
        let holdings = portfolio(&[(10.0, Currency::EUR), (5.0, Currency::USD)]);
        assert!(holdings.missing_rates(Currency::USD, &bank).is_empty());
        assert!(holdings.evaluate(Currency::USD, &bank).is_ok());
    }

    #[test]
    fn test_extend_appends() {
        let mut holdings = portfolio(&[(1.0, Currency::EUR)]);
        holdings.extend([Money::new(2.0, Currency::EUR), Money::new(3.0, Currency::EUR)]);
        assert_eq!(holdings.len(), 3);
        assert_relative_eq!(
            holdings.evaluate(Currency::EUR, &Bank::new()).unwrap().amount(),
            6.0
        );
    }

    fn holding() -> impl Strategy<Value = (f64, Currency)> {
        (
            0.0f64..1.0e6,
            proptest::sample::select(vec![Currency::EUR, Currency::USD, Currency::KRW]),
        )
    }

    proptest! {
        #[test]
        fn prop_evaluation_is_order_independent(
            holdings in proptest::collection::vec(holding(), 0..20)
        ) {
            let mut bank = Bank::create(Currency::EUR, Currency::USD, 1.2);
            bank.add_exchange_rate(Currency::KRW, Currency::USD, 0.00075);

            let forward = portfolio(&holdings).evaluate(Currency::USD, &bank).unwrap();
            let mut reversed_holdings = holdings.clone();
            reversed_holdings.reverse();
            let reversed = portfolio(&reversed_holdings).evaluate(Currency::USD, &bank).unwrap();

            prop_assert_eq!(forward.currency(), reversed.currency());
            prop_assert!((forward.amount() - reversed.amount()).abs() <= 1e-6 * forward.amount().abs().max(1.0));
        }
    }
}
