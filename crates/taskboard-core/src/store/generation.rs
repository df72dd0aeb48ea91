//! Generation lifecycle: issuing a request and applying its result.

use std::time::Duration;

use jiff::{SignedDuration, Timestamp};
use log::{info, warn};

use super::{BoardStore, Command};
use crate::{
    clock::Clock,
    error::{BoardError, Result},
    generator::{self, GenerationResponse, TaskGenerator},
    ingest,
};

/// Handle for one in-flight generation request.
///
/// A ticket is only honoured while it is current: a reset or a newer request
/// invalidates it, and results arriving after its deadline are turned into a
/// timeout instead of being applied.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationTicket {
    epoch: u64,
    description: String,
    issued_at: Timestamp,
    deadline: Timestamp,
    timeout: Duration,
}

impl GenerationTicket {
    /// Trimmed description sent to the generator.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Instant the request was issued.
    pub fn issued_at(&self) -> Timestamp {
        self.issued_at
    }

    /// Instant after which the result is no longer applied.
    pub fn deadline(&self) -> Timestamp {
        self.deadline
    }

    /// Configured timeout for this request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<C: Clock> BoardStore<C> {
    /// Validates the description and marks the board as loading.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidInput` for an empty or whitespace-only
    /// description. Nothing is dispatched in that case.
    pub fn begin_generation(
        &mut self,
        description: &str,
        timeout: Duration,
    ) -> Result<GenerationTicket> {
        let description = ingest::validate_description(description)?;
        let span = SignedDuration::try_from(timeout).map_err(|e| BoardError::Configuration {
            message: format!("Invalid generation timeout: {e}"),
        })?;

        self.epoch += 1;
        self.dispatch(Command::SetLoading(true));
        self.dispatch(Command::SetError(None));

        let issued_at = self.clock.now();
        let deadline = issued_at.checked_add(span).unwrap_or(Timestamp::MAX);

        Ok(GenerationTicket {
            epoch: self.epoch,
            description,
            issued_at,
            deadline,
            timeout,
        })
    }

    /// Applies the result of a request issued with [`begin_generation`].
    ///
    /// On success the synthesized project replaces the current one and the
    /// number of tasks is returned. Failures are recorded with `SetError`,
    /// leaving any prior project intact, and returned as well.
    ///
    /// # Errors
    ///
    /// * `BoardError::Superseded` - a reset or newer request happened since the
    ///   ticket was issued; the state is left untouched
    /// * `BoardError::Timeout` - the result arrived after the deadline
    /// * any error carried by `outcome`
    ///
    /// [`begin_generation`]: BoardStore::begin_generation
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        outcome: Result<GenerationResponse>,
    ) -> Result<usize> {
        if ticket.epoch != self.epoch {
            warn!(
                "Discarding generation result for '{}': superseded",
                ticket.description
            );
            return Err(BoardError::Superseded);
        }

        let now = self.clock.now();
        let outcome = if now > ticket.deadline {
            warn!(
                "Discarding generation result for '{}': arrived after deadline",
                ticket.description
            );
            Err(BoardError::timeout(ticket.timeout))
        } else {
            outcome
        };

        let result = match outcome {
            Ok(response) => {
                let project = ingest::build_project(ticket.description, response, now);
                let count = project.tasks.len();
                info!(
                    "Loaded project with {} roles and {count} tasks",
                    project.selected_roles.len()
                );
                self.dispatch(Command::SetProject(project));
                Ok(count)
            }
            Err(e) => {
                warn!("Task generation failed: {e}");
                self.dispatch(Command::SetError(Some(e.to_string())));
                Err(e)
            }
        };
        self.dispatch(Command::SetLoading(false));
        result
    }

    /// Gives up on a request issued with [`begin_generation`] that will never
    /// deliver a result.
    ///
    /// While the ticket is current the board leaves the loading state and
    /// records `BoardError::Cancelled`; the prior project stays intact.
    /// Returns `false` for a stale ticket, which leaves the state untouched.
    ///
    /// [`begin_generation`]: BoardStore::begin_generation
    pub fn abandon_generation(&mut self, ticket: &GenerationTicket) -> bool {
        self.abandon_epoch(ticket.epoch, &ticket.description)
    }

    fn abandon_epoch(&mut self, epoch: u64, description: &str) -> bool {
        if epoch != self.epoch {
            return false;
        }
        warn!("Generation for '{description}' was abandoned before completing");
        self.epoch += 1;
        self.dispatch(Command::SetError(Some(BoardError::Cancelled.to_string())));
        self.dispatch(Command::SetLoading(false));
        true
    }

    /// Runs a complete generation against `generator`.
    ///
    /// The request is cancelled once the generator's timeout elapses; its
    /// result can then never reach the board. Dropping the returned future
    /// before it completes abandons the request the same way
    /// [`abandon_generation`] does.
    ///
    /// # Errors
    ///
    /// Validation errors are returned without touching the state. Transport,
    /// HTTP, response and timeout errors are recorded in the state and
    /// returned.
    ///
    /// [`abandon_generation`]: BoardStore::abandon_generation
    pub async fn generate<G: TaskGenerator>(
        &mut self,
        generator: &G,
        description: &str,
    ) -> Result<usize> {
        let ticket = self.begin_generation(description, generator.timeout())?;
        let mut pending = PendingGeneration {
            store: self,
            epoch: ticket.epoch,
            description: ticket.description.clone(),
            armed: true,
        };
        let outcome = generator::generate_with_timeout(generator, ticket.description()).await;
        pending.armed = false;
        pending.store.finish_generation(ticket, outcome)
    }
}

/// Clears the loading state if a generation is dropped mid-request.
struct PendingGeneration<'a, C: Clock> {
    store: &'a mut BoardStore<C>,
    epoch: u64,
    description: String,
    armed: bool,
}

impl<C: Clock> Drop for PendingGeneration<'_, C> {
    fn drop(&mut self) {
        if self.armed {
            self.store.abandon_epoch(self.epoch, &self.description);
        }
    }
}
