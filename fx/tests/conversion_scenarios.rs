//! End-to-end conversions against the built-in table.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use fxlookup_common::{Currency, ExchangeRate};
use fxlookup_fx::{default_rates, ConverterConfig, FxError, RateSource, SharedConverter};
use rust_decimal_macros::dec;

struct CountingSource {
    delay: Duration,
    loads: AtomicUsize,
}

#[async_trait]
impl RateSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    async fn load(&self) -> Vec<ExchangeRate> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        default_rates()
    }
}

fn c(code: &str) -> Currency {
    Currency::new(code)
}

#[tokio::test]
async fn built_in_table_scenario() {
    let shared = SharedConverter::from_config(&ConverterConfig::immediate());

    assert_eq!(shared.convert(&c("SR"), &c("USD"), dec!(100)).await, Ok(dec!(26.67)));
    assert_eq!(shared.convert(&c("YR"), &c("USD"), dec!(100000)).await, Ok(dec!(43.99)));
    assert_eq!(shared.convert(&c("YR"), &c("SR"), dec!(1)).await, Ok(dec!(0.00)));
    assert_eq!(shared.convert(&c("US Dollar"), &c("SR"), dec!(1)).await, Ok(dec!(3.75)));
    assert_eq!(shared.convert(&c("SR"), &c("USD"), dec!(-100)).await, Ok(dec!(-26.67)));
    assert_eq!(shared.convert(&c("SR"), &c("USD"), dec!(0)).await, Ok(dec!(0)));

    assert_eq!(
        shared.convert(&c("SR"), &c("YR"), dec!(10)).await,
        Err(FxError::RateNotFound { base: c("SR"), target: c("YR") })
    );
}

#[tokio::test]
async fn no_inverse_or_multi_hop_fallback() {
    let shared = SharedConverter::from_config(&ConverterConfig::immediate());

    // Each of these is reachable by inverting an entry or chaining two.
    for (base, target) in [("USD", "SR"), ("USD", "YR"), ("SR", "YR"), ("SR", "US Dollar")] {
        let result = shared.convert(&c(base), &c(target), dec!(1)).await;
        assert!(matches!(result, Err(FxError::RateNotFound { .. })), "{base}/{target}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn callers_wait_for_the_slow_load() {
    let source = Arc::new(CountingSource {
        delay: Duration::from_millis(200),
        loads: AtomicUsize::new(0),
    });
    let shared = Arc::new(SharedConverter::new(source.clone()));
    let started = Instant::now();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = shared.clone();
            tokio::spawn(async move {
                shared.convert(&c("SR"), &c("USD"), dec!(100)).await
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), Ok(dec!(26.67)));
    }

    assert!(started.elapsed() >= Duration::from_millis(200));
    assert_eq!(source.loads.load(Ordering::SeqCst), 1);

    // Once loaded there is no further wait.
    let again = Instant::now();
    shared.get().await;
    assert!(again.elapsed() < Duration::from_millis(200));
}
