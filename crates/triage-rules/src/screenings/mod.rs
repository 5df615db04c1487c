pub mod back_pain;
