//! Scraping event queue.
//!
//! The trigger endpoint publishes a single fire-and-forget event onto a
//! durable queue for the (external) scraping worker. No delivery
//! confirmation is consumed and nothing is retried here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lapin::options::{BasicPublishOptions, QueueDeclareOptions};
use lapin::types::{FieldTable, ShortString};
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::QueueConfig;
use crate::error::{AppError, Result};

/// AMQP delivery mode marking a message persistent.
const PERSISTENT: u8 = 2;

/// Event type understood by the scraping worker.
const START_SCRAPING: &str = "start_scraping";

/// Payload of a scraping event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapePayload {
    /// Start URL for the scrape (worker default when absent).
    pub url: Option<String>,
    /// Job priority.
    pub priority: i32,
}

/// Event envelope published to the scraping queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeEvent {
    /// Unique event identifier, also used as the AMQP message id.
    pub event_id: String,
    /// Event type tag.
    pub event_type: String,
    /// When the event was created.
    pub timestamp: DateTime<Utc>,
    /// Job parameters.
    pub payload: ScrapePayload,
}

impl ScrapeEvent {
    /// Create a start-scraping event with a fresh id.
    pub fn start_scraping(url: Option<String>, priority: i32) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            event_type: START_SCRAPING.to_string(),
            timestamp: Utc::now(),
            payload: ScrapePayload { url, priority },
        }
    }
}

/// Publisher seam for scraping events.
#[async_trait]
pub trait EventQueue: Send + Sync {
    /// Enqueue one event. Fire-and-forget.
    async fn publish(&self, event: &ScrapeEvent) -> Result<()>;
}

/// RabbitMQ-backed event queue.
pub struct AmqpQueue {
    channel: Channel,
    queue: String,
    // Held so the broker connection outlives the channel.
    _connection: Connection,
}

impl AmqpQueue {
    /// Connect to the broker and declare the durable queue.
    pub async fn connect(config: &QueueConfig) -> Result<Self> {
        let connection =
            Connection::connect(&config.url, ConnectionProperties::default()).await?;
        let channel = connection.create_channel().await?;

        channel
            .queue_declare(
                &config.name,
                QueueDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await?;

        tracing::info!(queue = %config.name, "Connected to message queue");

        Ok(Self {
            channel,
            queue: config.name.clone(),
            _connection: connection,
        })
    }
}

#[async_trait]
impl EventQueue for AmqpQueue {
    async fn publish(&self, event: &ScrapeEvent) -> Result<()> {
        let body = serde_json::to_vec(event).map_err(|e| AppError::Internal(e.to_string()))?;

        // Default exchange, routed by queue name; confirm is not awaited.
        let _confirm = self
            .channel
            .basic_publish(
                "",
                &self.queue,
                BasicPublishOptions::default(),
                &body,
                BasicProperties::default()
                    .with_delivery_mode(PERSISTENT)
                    .with_message_id(ShortString::from(event.event_id.clone())),
            )
            .await?;

        Ok(())
    }
}
