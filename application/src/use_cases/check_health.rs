//! Check Health use case
//!
//! Concurrently probes every member plus the chairman and assembles one
//! consolidated report. Independent from the query workflow - no stage
//! dependency, no early termination, everything is always probed.

use crate::fan_out::fan_out;
use crate::ports::clients::{ChairmanClient, MemberClient};
use council_domain::{HealthReport, HealthStatus};
use futures::FutureExt;
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::info;

/// Use case for probing the whole council's liveness
pub struct CheckHealthUseCase {
    members: Vec<Arc<dyn MemberClient>>,
    chairman: Arc<dyn ChairmanClient>,
}

/// Who a probe result belongs to. The fan-out drops aborted tasks, so
/// results carry their subject instead of being matched back by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProbeSubject {
    Member,
    Chairman,
}

impl CheckHealthUseCase {
    pub fn new(members: Vec<Arc<dyn MemberClient>>, chairman: Arc<dyn ChairmanClient>) -> Self {
        Self { members, chairman }
    }

    /// Probe all members and the chairman in one fan-out.
    ///
    /// Member entries come back in configured order; probe failures are
    /// already classified by the clients, so this never fails.
    pub async fn execute(&self) -> HealthReport {
        info!("Probing {} members and the chairman", self.members.len());

        let mut tasks: Vec<BoxFuture<'static, (ProbeSubject, HealthStatus)>> = self
            .members
            .iter()
            .map(|member| {
                let member = Arc::clone(member);
                async move { (ProbeSubject::Member, member.check_health().await) }.boxed()
            })
            .collect();

        let chairman = Arc::clone(&self.chairman);
        tasks.push(async move { (ProbeSubject::Chairman, chairman.check_health().await) }.boxed());

        let mut members = Vec::with_capacity(self.members.len());
        let mut chairman = None;
        for (subject, status) in fan_out(tasks).await {
            match subject {
                ProbeSubject::Member => members.push(status),
                ProbeSubject::Chairman => chairman = Some(status),
            }
        }

        HealthReport {
            members,
            chairman: chairman
                .unwrap_or_else(|| HealthStatus::unreachable("chairman", "probe task aborted")),
        }
    }
}
