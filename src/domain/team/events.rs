use uuid::Uuid;

/// Domain events that occur within the Team aggregate
#[derive(Debug, Clone, PartialEq)]
pub enum TeamEvent {
    /// Fired when a team is created
    Created {
        /// ID of the newly created team
        team_id: Uuid,
        /// The team's display name
        name: String,
        /// User who owns the team
        owner_id: Uuid,
    },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> Uuid {
        match self {
            TeamEvent::Created { team_id, .. } => *team_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_created_event() {
        let team_id = Uuid::new_v4();
        let event = TeamEvent::Created {
            team_id,
            name: "A fine team".to_string(),
            owner_id: Uuid::new_v4(),
        };

        assert_eq!(event.team_id(), team_id);
    }
}
