// All prompt constants for the Generation module.
//
// Templates carry `{placeholder}` markers replaced before sending, the
// lead-context blocks are assembled in `builder` from the snapshot fields.

/// Generic lead-management persona. Used for all email generation and for
/// follow-up questions that arrive without a lead snapshot.
pub const GENERIC_SYSTEM_PROMPT: &str = "\
You are a helpful Business Lead Management Assistant specialized in helping businesses with lead management strategies.
You have expertise in:
- Lead generation techniques and best practices
- Lead qualification frameworks (like BANT, MEDDIC, CHAMP)
- CRM systems and lead tracking
- Lead scoring methodologies
- Lead nurturing strategies
- Sales funnel optimization
- Lead conversion tactics
- B2B and B2C lead management differences
- Sales and marketing alignment for lead management

Provide concise, practical advice specific to business lead management. Be helpful and friendly, but stay focused on lead management topics.";

/// Enhanced advice persona for follow-up requests that carry a lead
/// snapshot. Deliberately richer than the generic persona; the asymmetry
/// between the two request kinds is part of the contract.
pub const FOLLOWUP_SYSTEM_PROMPT: &str = "\
You are an expert Lead Management AI Assistant with years of experience in sales, marketing, and customer relationship management.

Your expertise includes:
- Lead qualification and scoring techniques (BANT, MEDDIC, CHAMP)
- Sales psychology and objection handling
- Timing strategies for follow-ups
- Communication tactics for different lead stages
- Industry-specific sales approaches
- Conversion optimization techniques

When providing recommendations:
- Be specific and actionable, not generic
- Include 2-3 concrete steps the salesperson can take immediately
- Base your advice on the lead's status, score, and value
- Consider timing, communication channel preferences, and objection handling
- Include a suggested timeline when appropriate
- Mention specific resources, content, or value propositions that might be helpful
- Use a confident, professional tone

Your goal is to help the salesperson convert this lead by providing highly targeted, tactical advice tailored to this specific situation.";

/// Closing instruction appended after the embedded follow-up question.
pub const FOLLOWUP_CLOSING_INSTRUCTION: &str = "\
Based on this lead's profile and the stage in the sales process, provide specific, actionable follow-up advice that will help move this lead forward. Include specific tactics, timing recommendations, content suggestions, and objection handling strategies as appropriate.";

/// Substrings that mark an already-embedded lead block. A prompt carrying
/// one of these is never enriched again (guards against double-templating
/// when a caller sends an already-enriched prompt).
pub const LEAD_BLOCK_MARKERS: [&str; 2] = ["LEAD PROFILE", "Lead Information"];

// Stage email templates. Each interpolates the shared `{lead_context}`
// block ahead of the stage-specific instructions, and every one mandates a
// subject line, a target tone, and a stage-appropriate length constraint.

pub const EMAIL_NEW_TEMPLATE: &str = "\
Generate a highly personalized first contact email for a new lead with the following details:
{lead_context}

The email should:
1. Start with a warm, personalized greeting
2. Introduce our company briefly and relevantly
3. Acknowledge their potential interest or pain points
4. Include 1-2 sentences about how we've helped similar companies
5. Suggest a specific discovery call time/date
6. End with a clear call-to-action

Keep it friendly, professional, and under 200 words.
Include subject line at the top.";

pub const EMAIL_CONTACTED_TEMPLATE: &str = "\
Create a follow-up email for a lead we've already reached out to:
{lead_context}

The email should:
1. Reference our previous communication specifically
2. Provide additional value like an industry insight, case study, or relevant resource
3. Show understanding of their business challenges
4. Reiterate our interest in scheduling a call
5. Suggest a specific next step

Keep it concise, engaging, and relationship-focused.
Include subject line at the top.";

pub const EMAIL_QUALIFIED_TEMPLATE: &str = "\
Draft an email for a qualified lead who has shown clear interest:
{lead_context}

The email should:
1. Recap their specific needs you've discussed
2. Explain precisely how your product addresses those exact needs
3. Include relevant social proof from their industry
4. Suggest next concrete steps (like a product demo)
5. Include a specific call-to-action with suggested times

Make it personalized to their unique situation.
Include subject line at the top.";

pub const EMAIL_PROPOSAL_TEMPLATE: &str = "\
Create a proposal follow-up email:
{lead_context}

The email should:
1. Check in on their review process
2. Address potential questions or objections
3. Offer clarification if needed
4. Suggest a specific timeline for moving forward
5. Reiterate the key value points from the proposal

Be helpful without being pushy.
Include subject line at the top.";

pub const EMAIL_NEGOTIATION_TEMPLATE: &str = "\
Write a negotiation-stage email:
{lead_context}

The email should:
1. Thank them for ongoing discussions
2. Diplomatically clarify our position on key terms
3. Express flexibility where appropriate
4. Emphasize the partnership value
5. Suggest next concrete steps to move forward

Be diplomatic, confident, and partnership-focused.
Include subject line at the top.";

pub const EMAIL_CLOSED_TEMPLATE: &str = "\
Create a thank you email for a closed deal:
{lead_context}

The email should:
1. Express genuine gratitude for their business
2. Outline specific next steps for implementation
3. Introduce key contacts they'll be working with (names/roles)
4. Mention our customer success process
5. Set expectations for the onboarding timeline

Be warm, excited, and reassuring.
Include subject line at the top.";

/// Fallback for unrecognized stages.
pub const EMAIL_GENERIC_TEMPLATE: &str = "\
Write a professional follow-up email to this lead:
{lead_context}

Make it personalized, concise, and with a clear next step.
Include subject line at the top.";
