// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to keep slow work off the
//! main UI thread. It provides a dedicated worker loop that translates
//! [`AppTask`] requests into calls on a [`VideoSource`] and broadcasts the
//! results back to the application via [`AppEvent`]s.
//!
//! The worker never touches UI state. Results are applied by the event loop
//! on the main thread.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{debug, error, info};

use crate::{config::AppConfig, events::AppEvent, source::VideoSource};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadVideos,
}

/// Spawns a background thread to process application tasks.
///
/// The worker blocks on `task_rx` and handles each [`AppTask`] in turn, until
/// the sending side of the channel is dropped.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
/// * `source` - Where video records are fetched from.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
    source: Box<dyn VideoSource>,
) -> thread::JoinHandle<()> {
    let load_delay = config.load_delay();

    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                load_delay,
                event_tx: &event_tx,
                source: source.as_ref(),
            };

            if let Err(e) = handle_task(task, &ctx) {
                error!("task failed: {e:#}");
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
        debug!("task channel closed, worker exiting");
    })
}

/// Bundles shared resources required by task handlers.
struct TaskContext<'a> {
    load_delay: Duration,
    event_tx: &'a Sender<AppEvent>,
    source: &'a dyn VideoSource,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadVideos => load_videos(ctx),
    }
}

/// Simulates a slow fetch, then hands the complete record set to the UI.
fn load_videos(ctx: &TaskContext) -> Result<()> {
    debug!(delay_ms = ctx.load_delay.as_millis() as u64, "loading videos");
    thread::sleep(ctx.load_delay);

    let videos = ctx.source.fetch()?;
    info!(count = videos.len(), "videos loaded");
    ctx.event_tx.send(AppEvent::VideosLoaded(videos))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Instant};

    use super::*;
    use crate::{
        model::{VideoRecord, catalog::sample_catalog},
        source::MockVideoSource,
    };

    fn config_with_delay(load_delay_ms: u64) -> AppConfig {
        AppConfig {
            load_delay_ms,
            ..AppConfig::default()
        }
    }

    #[test]
    fn load_videos_sends_catalog_after_delay() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(
            &config_with_delay(20),
            task_rx,
            event_tx,
            Box::new(MockVideoSource::new()),
        );

        let started = Instant::now();
        task_tx.send(AppTask::LoadVideos).unwrap();

        match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            AppEvent::VideosLoaded(videos) => assert_eq!(videos, sample_catalog()),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn nothing_is_sent_until_a_load_is_requested() {
        let (_task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(
            &config_with_delay(0),
            task_rx,
            event_tx,
            Box::new(MockVideoSource::new()),
        );

        assert!(event_rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn source_failure_is_reported_as_error_event() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let source = MockVideoSource::with_records(vec![
            VideoRecord::new(7, "a", "x", 1, ""),
            VideoRecord::new(7, "b", "y", 2, ""),
        ]);
        spawn_task_worker(&config_with_delay(0), task_rx, event_tx, Box::new(source));

        task_tx.send(AppTask::LoadVideos).unwrap();

        match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            AppEvent::Error(message) => assert!(message.contains("duplicate video id 7")),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn worker_exits_when_task_channel_closes() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, _event_rx) = mpsc::channel();
        let handle = spawn_task_worker(
            &config_with_delay(0),
            task_rx,
            event_tx,
            Box::new(MockVideoSource::new()),
        );

        drop(task_tx);
        handle.join().unwrap();
    }
}
