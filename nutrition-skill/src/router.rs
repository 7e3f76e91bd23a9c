//! Routes skill events to the lifecycle hooks.

use shared::{
    build_response, Config, Error, FoodClient, RequestType, Result, Session, SessionAttributes,
    SkillEvent, SkillRequest, SkillResponse,
};
use tracing::{debug, info, warn};

use crate::intents;

/// Per-process skill state, built once at cold start and shared read-only.
pub struct Skill {
    food_client: FoodClient,
    /// Expected application ID, if the check is enabled
    application_id: Option<String>,
}

impl Skill {
    pub fn new(food_client: FoodClient, application_id: Option<String>) -> Self {
        Self {
            food_client,
            application_id,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            FoodClient::from_config(config)?,
            config.application_id.clone(),
        ))
    }

    /// Route one event by request type.
    ///
    /// Returns `None` for session-ended and unsupported requests, which take
    /// no response body.
    pub async fn route(&self, event: SkillEvent) -> Result<Option<SkillResponse>> {
        let SkillEvent { session, request } = event;

        info!(
            "event.session.application.applicationId={}",
            session.application.application_id
        );
        self.verify_application(&session)?;

        if session.new {
            on_session_started(&request, &session);
        }

        match request.request_type {
            RequestType::LaunchRequest => Ok(Some(on_launch(&request, &session))),
            RequestType::IntentRequest => self.on_intent(&request, &session).await.map(Some),
            RequestType::SessionEndedRequest => {
                on_session_ended(&request, &session);
                Ok(None)
            }
            RequestType::Unsupported => {
                debug!(
                    request_id = %request.request_id,
                    "Ignoring unsupported request type"
                );
                Ok(None)
            }
        }
    }

    fn verify_application(&self, session: &Session) -> Result<()> {
        match &self.application_id {
            Some(expected) if *expected != session.application.application_id => {
                warn!(
                    "Rejecting event for application {}",
                    session.application.application_id
                );
                Err(Error::InvalidApplicationId(
                    session.application.application_id.clone(),
                ))
            }
            _ => Ok(()),
        }
    }

    async fn on_intent(&self, request: &SkillRequest, session: &Session) -> Result<SkillResponse> {
        info!(
            "onIntent requestId={}, sessionId={}",
            request.request_id, session.session_id
        );

        let intent = request
            .intent
            .as_ref()
            .ok_or_else(|| Error::MalformedEvent("IntentRequest without an intent".to_string()))?;

        let speechlet = intents::dispatch(&self.food_client, intent).await?;
        Ok(build_response(SessionAttributes::new(), speechlet))
    }
}

fn on_session_started(request: &SkillRequest, session: &Session) {
    info!(
        "onSessionStarted requestId={}, sessionId={}",
        request.request_id, session.session_id
    );
}

fn on_launch(request: &SkillRequest, session: &Session) -> SkillResponse {
    info!(
        "onLaunch requestId={}, sessionId={}",
        request.request_id, session.session_id
    );
    build_response(SessionAttributes::new(), intents::welcome())
}

fn on_session_ended(request: &SkillRequest, session: &Session) {
    info!(
        "onSessionEnded requestId={}, sessionId={}, reason={}",
        request.request_id,
        session.session_id,
        request.reason.as_deref().unwrap_or("unknown")
    );
}
