use actix::prelude::*;
use std::sync::Arc;

use crate::domain::directory::{
    ChangeOutcome, CompanyAggregate, DirectoryError, EmailChangeWorkflow, UserRecord,
};

// ============================================================================
// Actor Messages
// ============================================================================

#[derive(Message)]
#[rtype(result = "Result<ChangeOutcome, DirectoryError>")]
pub struct ChangeEmail {
    pub user_id: String,
    pub new_email: String,
}

#[derive(Message)]
#[rtype(result = "Option<UserRecord>")]
pub struct GetUser {
    pub user_id: String,
}

#[derive(Message)]
#[rtype(result = "CompanyAggregate")]
pub struct GetCompany;

#[derive(Message)]
#[rtype(result = "Vec<UserRecord>")]
pub struct ListUsers;

// ============================================================================
// Directory Actor - single mailbox in front of the email-change workflow
// ============================================================================
//
// Every ChangeEmail is handled to completion before the next message is
// taken off the mailbox, so concurrent callers are served one change at a
// time. The store's own lock still guards direct store access.
//
// ============================================================================

pub struct DirectoryActor {
    workflow: Arc<EmailChangeWorkflow>,
}

impl DirectoryActor {
    pub fn new(workflow: Arc<EmailChangeWorkflow>) -> Self {
        Self { workflow }
    }
}

impl Actor for DirectoryActor {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        tracing::info!("DirectoryActor started");
    }
}

// ============================================================================
// Message Handlers
// ============================================================================

impl Handler<ChangeEmail> for DirectoryActor {
    type Result = Result<ChangeOutcome, DirectoryError>;

    fn handle(&mut self, msg: ChangeEmail, _: &mut Self::Context) -> Self::Result {
        tracing::debug!(
            user_id = %msg.user_id,
            new_email = %msg.new_email,
            "Handling email change"
        );
        self.workflow.change_email(&msg.user_id, &msg.new_email)
    }
}

impl Handler<GetUser> for DirectoryActor {
    type Result = MessageResult<GetUser>;

    fn handle(&mut self, msg: GetUser, _: &mut Self::Context) -> Self::Result {
        MessageResult(self.workflow.store().get_user(&msg.user_id))
    }
}

impl Handler<GetCompany> for DirectoryActor {
    type Result = MessageResult<GetCompany>;

    fn handle(&mut self, _msg: GetCompany, _: &mut Self::Context) -> Self::Result {
        MessageResult(self.workflow.store().get_company())
    }
}

impl Handler<ListUsers> for DirectoryActor {
    type Result = MessageResult<ListUsers>;

    fn handle(&mut self, _msg: ListUsers, _: &mut Self::Context) -> Self::Result {
        MessageResult(self.workflow.store().list_users())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::{Classification, ErrorKind};
    use crate::messaging::ConsoleNotifier;
    use crate::store::RecordStore;

    fn start_actor() -> Addr<DirectoryActor> {
        let workflow = EmailChangeWorkflow::new(
            Arc::new(RecordStore::default()),
            Arc::new(ConsoleNotifier::with_sink(std::io::sink())),
        );
        DirectoryActor::new(Arc::new(workflow)).start()
    }

    fn change(user_id: &str, new_email: &str) -> ChangeEmail {
        ChangeEmail {
            user_id: user_id.to_string(),
            new_email: new_email.to_string(),
        }
    }

    #[actix::test]
    async fn test_change_email_through_mailbox() {
        let addr = start_actor();

        let outcome = addr
            .send(change("3", "michael@loglass.co.jp"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(outcome.event().unwrap().employee_count, 3);

        let user = addr
            .send(GetUser { user_id: "3".to_string() })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.classification(), Classification::Employee);

        let company = addr.send(GetCompany).await.unwrap();
        assert_eq!(company.employee_count(), 3);
    }

    #[actix::test]
    async fn test_errors_come_back_through_mailbox() {
        let addr = start_actor();

        let err = addr.send(change("999", "x@y.com")).await.unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let users = addr.send(ListUsers).await.unwrap();
        assert_eq!(users.len(), 3);
    }

    #[actix::test]
    async fn test_interleaved_senders_keep_count_consistent() {
        let addr = start_actor();

        let requests = vec![
            addr.send(change("1", "alice@example.com")),
            addr.send(change("2", "bob@example.com")),
            addr.send(change("3", "michael@loglass.co.jp")),
            addr.send(change("1", "alice@loglass.co.jp")),
        ];
        for request in requests {
            request.await.unwrap().unwrap();
        }

        let users = addr.send(ListUsers).await.unwrap();
        let employees = users
            .iter()
            .filter(|u| u.classification() == Classification::Employee)
            .count();
        let company = addr.send(GetCompany).await.unwrap();
        assert_eq!(company.employee_count() as usize, employees);
        assert_eq!(employees, 2);
    }
}
