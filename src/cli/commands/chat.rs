use anyhow::Result;

use crate::chat::ChatSession;
use crate::context::AppContext;

pub async fn run_chat(context: AppContext, show_query: bool) -> Result<()> {
    let mut session = ChatSession::new(context, show_query);
    session.run().await
}
