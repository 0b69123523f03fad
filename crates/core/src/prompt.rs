//! Rewrite prompt construction.
//!
//! This module defines the categorical parameters that shape a rewrite
//! (audience, access context, optional delivery channel) and assembles the
//! instruction sent to the chat-completion model. Parameter values are
//! embedded verbatim; the page text is interpolated as-is with no
//! truncation, so oversized input fails at the API boundary.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// System message sent with every chat request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// The audience a rewrite is targeted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    ImagingTechnicians,
    Procurement,
    Journalist,
}

impl Audience {
    /// All selectable audiences, in UI order.
    pub const ALL: [Audience; 3] = [Audience::ImagingTechnicians, Audience::Procurement, Audience::Journalist];

    /// The literal value embedded in the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::ImagingTechnicians => "imaging technicians",
            Audience::Procurement => "procurement",
            Audience::Journalist => "journalist",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "imaging technicians" | "imaging-technicians" => Ok(Audience::ImagingTechnicians),
            "procurement" => Ok(Audience::Procurement),
            "journalist" => Ok(Audience::Journalist),
            _ => Err(format!(
                "Invalid audience: {}. Valid options: imaging-technicians, procurement, journalist",
                s
            )),
        }
    }
}

/// The context the rewritten content will be consumed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessContext {
    Mobile,
    Desktop,
    Podcast,
}

impl AccessContext {
    /// All selectable contexts, in UI order.
    pub const ALL: [AccessContext; 3] = [AccessContext::Mobile, AccessContext::Desktop, AccessContext::Podcast];

    /// The literal value embedded in the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessContext::Mobile => "mobile",
            AccessContext::Desktop => "desktop",
            AccessContext::Podcast => "podcast",
        }
    }
}

impl fmt::Display for AccessContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mobile" => Ok(AccessContext::Mobile),
            "desktop" => Ok(AccessContext::Desktop),
            "podcast" => Ok(AccessContext::Podcast),
            _ => Err(format!("Invalid context: {}. Valid options: mobile, desktop, podcast", s)),
        }
    }
}

/// The delivery channel for the rewritten content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Newsletter,
    SocialMedia,
}

impl Channel {
    /// All selectable channels, in UI order.
    pub const ALL: [Channel; 3] = [Channel::Email, Channel::Newsletter, Channel::SocialMedia];

    /// The literal value embedded in the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Newsletter => "newsletter",
            Channel::SocialMedia => "social media",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(Channel::Email),
            "newsletter" => Ok(Channel::Newsletter),
            "social media" | "social-media" | "social" => Ok(Channel::SocialMedia),
            _ => Err(format!("Invalid channel: {}. Valid options: email, newsletter, social-media", s)),
        }
    }
}

/// One rewrite's worth of input.
///
/// Lives for a single interaction; there is no persistence.
#[derive(Debug, Clone)]
pub struct RewriteRequest {
    /// Cleaned page text to rewrite.
    pub original: String,
    /// Target audience.
    pub audience: Audience,
    /// Consumption context.
    pub context: AccessContext,
    /// Optional delivery channel.
    pub channel: Option<Channel>,
}

/// Builds the user-message instruction for a rewrite request.
///
/// The audience, context, and channel values are embedded verbatim and
/// unescaped, followed by the original text.
pub fn build_prompt(request: &RewriteRequest) -> String {
    let mut instruction = format!(
        "Rewrite the following content for a {} audience that's accessing this content on {}",
        request.audience.as_str(),
        request.context.as_str()
    );

    if let Some(channel) = request.channel {
        instruction.push_str(&format!(", to be shared via {}", channel.as_str()));
    }

    format!("{}:\n\n{}", instruction, request.original)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(channel: Option<Channel>) -> RewriteRequest {
        RewriteRequest {
            original: "The quick brown fox.".to_string(),
            audience: Audience::Procurement,
            context: AccessContext::Mobile,
            channel,
        }
    }

    #[test]
    fn test_prompt_embeds_parameters_verbatim() {
        let prompt = build_prompt(&request(None));
        assert!(prompt.contains("for a procurement audience"));
        assert!(prompt.contains("on mobile"));
        assert!(prompt.contains("The quick brown fox."));
    }

    #[test]
    fn test_prompt_with_channel() {
        let prompt = build_prompt(&request(Some(Channel::SocialMedia)));
        assert!(prompt.contains("to be shared via social media"));
    }

    #[test]
    fn test_prompt_without_channel() {
        let prompt = build_prompt(&request(None));
        assert!(!prompt.contains("shared via"));
    }

    #[test]
    fn test_prompt_keeps_original_unescaped() {
        let mut req = request(None);
        req.original = "<p>raw & unescaped</p>".to_string();
        let prompt = build_prompt(&req);
        assert!(prompt.contains("<p>raw & unescaped</p>"));
    }

    #[test]
    fn test_audience_round_trip() {
        for audience in Audience::ALL {
            assert_eq!(audience.as_str().parse::<Audience>().unwrap(), audience);
        }
        assert!("board members".parse::<Audience>().is_err());
    }

    #[test]
    fn test_context_round_trip() {
        for context in AccessContext::ALL {
            assert_eq!(context.as_str().parse::<AccessContext>().unwrap(), context);
        }
        assert!("print".parse::<AccessContext>().is_err());
    }

    #[test]
    fn test_channel_aliases() {
        assert_eq!("social-media".parse::<Channel>().unwrap(), Channel::SocialMedia);
        assert_eq!("social".parse::<Channel>().unwrap(), Channel::SocialMedia);
        assert!("carrier pigeon".parse::<Channel>().is_err());
    }
}
