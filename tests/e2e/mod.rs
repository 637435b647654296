mod create;
mod folders;
mod mouse;
mod theme;
