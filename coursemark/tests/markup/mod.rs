mod conversion;
mod metadata;
mod properties;
