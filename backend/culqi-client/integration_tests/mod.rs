mod dispatcher;
mod helpers;
mod resources;
