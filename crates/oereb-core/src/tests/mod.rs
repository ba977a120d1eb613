mod address;
mod documents;
mod urls;
