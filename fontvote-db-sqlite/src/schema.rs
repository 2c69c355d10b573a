///////////////////////////////////////////////////////////////////////
// Fonts
///////////////////////////////////////////////////////////////////////

table! {
    fonts (id) {
        id -> BigInt,
        name -> Text,
        url -> Text,
        upvotes -> BigInt,
        downvotes -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Tags
///////////////////////////////////////////////////////////////////////

table! {
    tags (id) {
        id -> BigInt,
        name -> Text,
    }
}

table! {
    font_tags (font_id, tag_id) {
        font_id -> BigInt,
        tag_id -> BigInt,
    }
}

joinable!(font_tags -> fonts (font_id));
joinable!(font_tags -> tags (tag_id));

///////////////////////////////////////////////////////////////////////
// Votes
///////////////////////////////////////////////////////////////////////

table! {
    votes (font_id, user_id) {
        font_id -> BigInt,
        user_id -> Text,
        vote_type -> Text,
        created_at -> BigInt,
    }
}

joinable!(votes -> fonts (font_id));

allow_tables_to_appear_in_same_query!(fonts, tags, font_tags, votes);
