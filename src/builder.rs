//! Chat request assembly
//!
//! [`ChatRequestBuilder`] collects an ordered conversation, attaches images
//! to the current user turn, and hands the finished request to a
//! [`CompletionClient`].

use std::path::Path;

use tracing::{debug, info};

use crate::client::CompletionClient;
use crate::error::InferenceResult;
use crate::native::{
    load_image, load_image_file, ChatCompletionRequest, ChatCompletionResponse, Content, ContentPart, GenerationParams,
    ImageDetail, ImageUrl, Message, Role,
};

/// Ordered conversation under construction
///
/// Role alternation is not enforced; callers decide the turn order.
#[derive(Debug, Clone, Default)]
pub struct ChatRequestBuilder {
    messages: Vec<Message>,
}

impl ChatRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message
    ///
    /// Fails only when `role` is not one of `system`, `user`, `assistant`.
    pub fn add_message(&mut self, role: &str, content: impl Into<Content>) -> InferenceResult<&mut Self> {
        let role: Role = role.parse()?;
        self.messages.push(Message::new(role, content));
        Ok(self)
    }

    pub fn system(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.push(Message::system(text));
        self
    }

    pub fn user(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.push(Message::user(Content::Text(text.into())));
        self
    }

    pub fn assistant(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.push(Message::assistant(text));
        self
    }

    /// Append a text item to the current user turn
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.current_user_turn().push(ContentPart::text(text));
        self
    }

    /// Read a local image and append it to the current user turn
    ///
    /// The file is read before anything is appended, so a missing file leaves
    /// the conversation untouched.
    pub fn add_image(
        &mut self,
        path: impl AsRef<Path>,
        mime_type: &str,
        detail: ImageDetail,
    ) -> InferenceResult<&mut Self> {
        let image = load_image(path.as_ref(), mime_type, detail)?;
        self.current_user_turn().push(ContentPart::image(image));
        Ok(self)
    }

    /// Like [`add_image`](Self::add_image), with the MIME type taken from the
    /// file extension once the file has been read
    pub fn add_image_file(
        &mut self,
        path: impl AsRef<Path>,
        detail: ImageDetail,
    ) -> InferenceResult<&mut Self> {
        let image = load_image_file(path.as_ref(), detail)?;
        self.current_user_turn().push(ContentPart::image(image));
        Ok(self)
    }

    /// Append an image by URL reference to the current user turn
    pub fn add_image_url(&mut self, url: impl Into<String>, detail: ImageDetail) -> &mut Self {
        let image = ImageUrl {
            url: url.into(),
            detail: Some(detail),
        };
        self.current_user_turn().push(ContentPart::image(image));
        self
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Produce the request without sending it
    pub fn build(&self, params: &GenerationParams) -> InferenceResult<ChatCompletionRequest> {
        params.validate()?;
        Ok(ChatCompletionRequest::new(self.messages.clone(), params))
    }

    /// Build the request and complete it with `client`
    pub async fn send<C>(&self, client: &C, params: &GenerationParams) -> InferenceResult<ChatCompletionResponse>
    where
        C: CompletionClient + ?Sized,
    {
        let request = self.build(params)?;
        info!(
            messages = request.messages.len(),
            max_tokens = ?request.max_tokens,
            temperature = ?request.temperature,
            "Sending conversation"
        );
        client.complete(&request).await
    }

    /// Content of the trailing user message, opening one if needed
    fn current_user_turn(&mut self) -> &mut Content {
        let needs_new_turn = self
            .messages
            .last()
            .map_or(true, |message| message.role != Role::User);

        if needs_new_turn {
            debug!("Opening a new user turn for multimodal content");
            self.messages.push(Message::user(Vec::<ContentPart>::new()));
        }

        let last = self.messages.len() - 1;
        &mut self.messages[last].content
    }
}
