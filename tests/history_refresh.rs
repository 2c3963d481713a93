mod common;

use common::*;
use futures::executor::block_on;
use live_candles_wasm::application::{
    HistoryPoller, LiveChartCoordinator, RefreshOutcome, SharedCoordinator, TickOutcome, TickStreamer,
};
use live_candles_wasm::domain::{
    chart::{ChartState, SeriesFields, SeriesIndex},
    errors::AppError,
    market_data::{HistoryPayload, Price, TimeInterval, Timestamp},
};
use live_candles_wasm::time_utils::utc_offset;

type TestCoordinator = SharedCoordinator<RecordingChartSink, RecordingSummarySink>;

fn coordinator() -> TestCoordinator {
    LiveChartCoordinator::new(
        RecordingChartSink::default(),
        RecordingSummarySink::default(),
        TimeInterval::OneMinute,
        60,
    )
    .shared()
}

fn poller(
    responses: Vec<Result<HistoryPayload, AppError>>,
    coordinator: &TestCoordinator,
) -> HistoryPoller<ScriptedSource, RecordingChartSink, RecordingSummarySink> {
    HistoryPoller::new(ScriptedSource::new(responses), coordinator.clone()).with_offset(utc_offset)
}

#[test]
fn first_refresh_creates_plot_with_projected_live_point() {
    let coordinator = coordinator();
    let poller = poller(vec![Ok(two_bar_history())], &coordinator);

    let outcome = block_on(poller.refresh_history());
    assert_eq!(outcome, Some(RefreshOutcome::Created { candles: 2 }));

    let c = coordinator.borrow();
    let calls = &c.chart_sink().calls;
    assert_eq!(calls.len(), 1);
    let SinkCall::CreatePlot(plot) = &calls[0] else {
        panic!("expected create_plot, got {:?}", calls[0]);
    };

    assert_eq!(plot.candles.close, vec![102.0, 103.0]);
    assert_eq!(plot.live.time, Timestamp::from_millis(TEN_AM + 2 * MINUTE));
    assert_eq!(plot.live.price, Price::from(103.0));
    assert_eq!(plot.live.label, "$103");
    assert_eq!(plot.ticks.labels, vec!["10:00", "10:01", "current"]);
    assert_eq!(
        plot.ticks.positions,
        vec![
            Timestamp::from_millis(TEN_AM),
            Timestamp::from_millis(TEN_AM + MINUTE),
            Timestamp::from_millis(TEN_AM + 2 * MINUTE),
        ]
    );

    assert_eq!(
        c.state(),
        ChartState::Live { last_candle_time: Timestamp::from_millis(TEN_AM + MINUTE) }
    );
    let summary = &c.summary_sink().published[0];
    assert_eq!(summary.window, "· window: 10:00 – 10:01 (2m)");
    assert_eq!(summary.last_updated, "· last update: 19 Oct 2026 10:01");
}

#[test]
fn later_refreshes_update_candles_then_marker_then_axis() {
    let coordinator = coordinator();
    let next = HistoryPayload::Candles(vec![
        candle(1, 102.0, 104.0, 101.0, 103.0),
        candle(2, 103.0, 106.0, 102.0, 105.5),
    ]);
    let poller = poller(vec![Ok(two_bar_history()), Ok(next)], &coordinator);

    block_on(poller.refresh_history());
    let outcome = block_on(poller.refresh_history());
    assert_eq!(outcome, Some(RefreshOutcome::Updated { candles: 2 }));

    let c = coordinator.borrow();
    let calls = &c.chart_sink().calls[1..];
    assert_eq!(calls.len(), 3);

    let SinkCall::UpdateSeries(candles) = &calls[0] else {
        panic!("expected candle update, got {:?}", calls[0]);
    };
    assert_eq!(candles.index(), SeriesIndex::Candles);

    let SinkCall::UpdateSeries(SeriesFields::LiveMarker { point, label_style }) = &calls[1] else {
        panic!("expected live marker update, got {:?}", calls[1]);
    };
    assert_eq!(point.time, Timestamp::from_millis(TEN_AM + 3 * MINUTE));
    assert_eq!(point.label, "$105.5");
    assert!(label_style.is_none());

    let SinkCall::RelayoutAxes(ticks) = &calls[2] else {
        panic!("expected relayout, got {:?}", calls[2]);
    };
    assert_eq!(ticks.labels, vec!["10:01", "10:02", "current"]);

    assert_eq!(c.state().last_candle_time(), Some(Timestamp::from_millis(TEN_AM + 2 * MINUTE)));
    assert_eq!(c.summary_sink().published.len(), 2);
}

#[test]
fn empty_cycles_touch_nothing() {
    let coordinator = coordinator();
    let poller = poller(
        vec![Ok(HistoryPayload::NoData), Ok(HistoryPayload::Candles(Vec::new()))],
        &coordinator,
    );

    assert_eq!(block_on(poller.refresh_history()), Some(RefreshOutcome::NoData));
    assert_eq!(block_on(poller.refresh_history()), Some(RefreshOutcome::NoData));

    let c = coordinator.borrow();
    assert!(c.chart_sink().calls.is_empty());
    assert!(c.summary_sink().published.is_empty());
    assert_eq!(c.state(), ChartState::Uninitialized);
}

#[test]
fn no_data_after_live_keeps_previous_chart() {
    let coordinator = coordinator();
    let poller = poller(vec![Ok(two_bar_history()), Ok(HistoryPayload::NoData)], &coordinator);

    block_on(poller.refresh_history());
    block_on(poller.refresh_history());

    let c = coordinator.borrow();
    assert_eq!(c.chart_sink().calls.len(), 1);
    assert_eq!(c.state().last_candle_time(), Some(Timestamp::from_millis(TEN_AM + MINUTE)));
}

#[test]
fn fetch_failure_is_logged_and_skipped() {
    capture_logs();
    let coordinator = coordinator();
    let poller = poller(
        vec![
            Ok(two_bar_history()),
            Err(AppError::NetworkError("history endpoint returned 502".to_string())),
        ],
        &coordinator,
    );

    block_on(poller.refresh_history());
    assert_eq!(block_on(poller.refresh_history()), None);

    let c = coordinator.borrow();
    assert_eq!(c.chart_sink().calls.len(), 1);
    assert_eq!(c.state().last_candle_time(), Some(Timestamp::from_millis(TEN_AM + MINUTE)));
    assert!(
        captured_errors().iter().any(|m| m.contains("history endpoint returned 502")),
        "fetch error should be logged"
    );
}

#[test]
fn sink_failure_keeps_previous_state() {
    let coordinator = coordinator();
    let next = HistoryPayload::Candles(vec![candle(5, 1.0, 1.0, 1.0, 1.0)]);
    let poller = poller(vec![Ok(two_bar_history()), Ok(next)], &coordinator);

    block_on(poller.refresh_history());
    coordinator.borrow_mut().chart_sink_mut().fail_updates = true;
    assert_eq!(block_on(poller.refresh_history()), None);

    let c = coordinator.borrow();
    assert_eq!(c.state().last_candle_time(), Some(Timestamp::from_millis(TEN_AM + MINUTE)));
    assert_eq!(c.summary_sink().published.len(), 1);
}

#[test]
fn long_history_is_cut_to_latest_sixty() {
    let coordinator = coordinator();
    let poller = poller(vec![Ok(HistoryPayload::Candles(flat_candles(75)))], &coordinator);

    assert_eq!(block_on(poller.refresh_history()), Some(RefreshOutcome::Created { candles: 60 }));

    let c = coordinator.borrow();
    let SinkCall::CreatePlot(plot) = &c.chart_sink().calls[0] else {
        panic!("expected create_plot");
    };
    assert_eq!(plot.candles.times.len(), 60);
    assert_eq!(plot.candles.times[0], Timestamp::from_millis(TEN_AM + 15 * MINUTE));
    assert_eq!(plot.ticks.positions.len(), 61);
    assert_eq!(
        c.summary_sink().published[0].window,
        "· window: 10:15 – 11:14 (60m)"
    );
}

#[test]
fn marker_failure_after_candle_replace_still_tracks_displayed_candles() {
    let coordinator = coordinator();
    let next = HistoryPayload::Candles(vec![
        candle(1, 102.0, 104.0, 101.0, 103.0),
        candle(2, 103.0, 106.0, 102.0, 105.5),
    ]);
    let poller = poller(vec![Ok(two_bar_history()), Ok(next)], &coordinator);

    block_on(poller.refresh_history());
    coordinator.borrow_mut().chart_sink_mut().fail_refresh_marker = true;
    assert_eq!(block_on(poller.refresh_history()), None);

    let displayed = {
        let c = coordinator.borrow();
        let Some(SinkCall::UpdateSeries(SeriesFields::Candles(columns))) = c.chart_sink().calls.last() else {
            panic!("expected the candle replace to be the last accepted call");
        };
        columns.times.clone()
    };
    assert_eq!(
        displayed,
        vec![Timestamp::from_millis(TEN_AM + MINUTE), Timestamp::from_millis(TEN_AM + 2 * MINUTE)]
    );

    let streamer = TickStreamer::new(coordinator.clone());
    assert_eq!(streamer.on_tick(r#"{"p":"106"}"#), TickOutcome::Applied);

    let c = coordinator.borrow();
    let Some(SinkCall::UpdateSeries(SeriesFields::LiveMarker { point, .. })) = c.chart_sink().calls.last() else {
        panic!("expected live marker update");
    };
    assert_eq!(point.time, Timestamp::from_millis(TEN_AM + 3 * MINUTE));
    assert!(!displayed.contains(&point.time));
    assert_eq!(c.summary_sink().published.len(), 2);
}
