use std::collections::HashMap;

use lazy_static::lazy_static;

use super::resolved_type::{Primitive, ResolvedType};

/// Prefix marking a list of the type named by the rest of the string.
pub const LIST_MARKER: &str = "Array of ";

/// Roots of the polymorphic type families. A declared type whose name starts with one of these is
/// tagged as one of its subtypes. The test is a plain prefix match, so names such as
/// `ChatMemberUpdated` or `InlineQueryResultsButton` are tagged too.
pub const SUPER_TYPE_NAMES: &[&str] = &[
    "InputMedia",
    "InputPaidMedia",
    "InlineQueryResult",
    "InputMessageContent",
    "PassportElementError",
    "BotCommandScope",
    "MenuButton",
    "ReactionType",
    "MessageOrigin",
    "BackgroundFill",
    "BackgroundType",
    "ChatBoostSource",
    "TransactionPartner",
    "RevenueWithdrawalState",
    "ChatMember",
    "PaidMedia",
];

/// Type strings naming one of several concrete types, with the names of their members.
pub const ALTERNATIVE_TYPES: &[(&str, &[&str])] = &[
    ("InputFile or String", &["InputFile", "String"]),
    ("Integer or String", &["Integer", "String"]),
    (
        "InlineKeyboardMarkup or ReplyKeyboardMarkup or ReplyKeyboardRemove or ForceReply",
        &[
            "InlineKeyboardMarkup",
            "ReplyKeyboardMarkup",
            "ReplyKeyboardRemove",
            "ForceReply",
        ],
    ),
    (
        "InputMediaAudio, InputMediaDocument, InputMediaPhoto and InputMediaVideo",
        &[
            "InputMediaAudio",
            "InputMediaDocument",
            "InputMediaPhoto",
            "InputMediaVideo",
        ],
    ),
    (
        "InputMediaPhoto and InputMediaVideo",
        &["InputMediaPhoto", "InputMediaVideo"],
    ),
];

lazy_static! {
    /// Type strings with a fixed meaning that is not a reference to a documented type.
    pub static ref BUILTIN_TYPES: HashMap<&'static str, ResolvedType> = HashMap::from([
        ("Integer", ResolvedType::Primitive(Primitive::Integer)),
        ("String", ResolvedType::Primitive(Primitive::String)),
        ("Boolean", ResolvedType::Primitive(Primitive::Boolean)),
        ("True", ResolvedType::Primitive(Primitive::Boolean)),
        ("Float", ResolvedType::Primitive(Primitive::Float)),
        ("Float number", ResolvedType::Primitive(Primitive::Float)),
        ("CallbackGame", ResolvedType::CallbackGame),
        ("InputFile", ResolvedType::InputFile),
        ("ParseMode", ResolvedType::ParseMode),
    ]);
}

pub fn super_type(name: &str) -> Option<&'static str> {
    SUPER_TYPE_NAMES.iter().copied().find(|s| *s == name)
}

/// The longest super type name that `name` starts with.
pub fn super_type_prefix(name: &str) -> Option<&'static str> {
    SUPER_TYPE_NAMES
        .iter()
        .copied()
        .filter(|s| name.starts_with(s))
        .max_by_key(|s| s.len())
}

pub fn alternative_type(name: &str) -> Option<(&'static str, &'static [&'static str])> {
    ALTERNATIVE_TYPES.iter().copied().find(|(n, _)| *n == name)
}
