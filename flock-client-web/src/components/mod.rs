mod bio_card;

pub use bio_card::BioCard;
