mod details;
mod layers;
mod panels;
