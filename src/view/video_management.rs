use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::video::{Video, VideoDto};
use crate::view::course_detail::sort_videos;
use crate::view::notice::Notice;
use crate::view::validation::{FormErrors, validate_video};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeFileRow {
    pub link: String,
    pub name: String,
}

/// Keeps rows with a link; unnamed rows get `Code File N` by row number.
pub fn code_file_entries(rows: &[CodeFileRow]) -> (Vec<String>, Vec<String>) {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let link = row.link.trim();
            if link.is_empty() {
                return None;
            }
            let name = match row.name.trim() {
                "" => format!("Code File {}", index + 1),
                name => name.to_string(),
            };
            Some((link.to_string(), name))
        })
        .unzip()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoForm {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub position: Option<u32>,
    pub notes_link: String,
    pub notes_name: String,
    pub code_files: Vec<CodeFileRow>,
}

impl VideoForm {
    pub fn for_new(position: u32) -> Self {
        VideoForm {
            position: Some(position),
            ..Default::default()
        }
    }

    /// Prefills the form from an existing video at `index` in the list.
    pub fn from_video(video: &Video, index: usize) -> Self {
        let links = video.drive_code_file_links.clone().unwrap_or_default();
        let names = video.drive_code_file_names.clone().unwrap_or_default();
        let code_files = links
            .into_iter()
            .enumerate()
            .map(|(i, link)| CodeFileRow {
                link,
                name: names.get(i).cloned().unwrap_or_default(),
            })
            .collect();
        VideoForm {
            title: video.title.clone(),
            description: video.description.clone(),
            video_url: video.video_url.clone(),
            position: video.position.filter(|p| *p > 0).or(Some(index as u32 + 1)),
            notes_link: video.drive_notes_file_link.clone().unwrap_or_default(),
            notes_name: video.drive_notes_file_name.clone().unwrap_or_default(),
            code_files,
        }
    }

    pub fn add_code_file(&mut self) {
        self.code_files.push(CodeFileRow::default());
    }

    pub fn remove_code_file(&mut self, index: usize) {
        if index < self.code_files.len() {
            self.code_files.remove(index);
        }
    }

    pub fn to_dto(&self, course_id: &str) -> Result<VideoDto, FormErrors> {
        validate_video(&self.title, &self.video_url)?;
        let (links, names) = code_file_entries(&self.code_files);
        Ok(VideoDto {
            title: self.title.clone(),
            description: self.description.clone(),
            course_id: course_id.to_string(),
            video_url: self.video_url.clone(),
            position: self.position,
            drive_notes_file_link: non_empty(&self.notes_link),
            drive_notes_file_name: non_empty(&self.notes_name),
            drive_code_file_links: links,
            drive_code_file_names: names,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value.to_string()) }
}

/// Admin-side list of one course's videos.
#[derive(Debug, Clone)]
pub struct VideoManager {
    pub course_id: String,
    videos: Vec<Video>,
}

impl VideoManager {
    pub fn new(course_id: &str, mut videos: Vec<Video>) -> Self {
        sort_videos(&mut videos);
        VideoManager {
            course_id: course_id.to_string(),
            videos,
        }
    }

    pub async fn load(hub: &StudieHub, course_id: &str) -> Result<Self, StudieHubError> {
        hub.require_admin()?;
        let videos = hub
            .get_course_videos(course_id)
            .await
            .map_err(|e| e.or_message("Failed to load videos"))?;
        Ok(VideoManager::new(course_id, videos))
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn next_position(&self) -> u32 {
        self.videos.len() as u32 + 1
    }

    pub fn new_form(&self) -> VideoForm {
        VideoForm::for_new(self.next_position())
    }

    pub fn edit_form(&self, video_id: &str) -> Option<VideoForm> {
        self.videos
            .iter()
            .position(|v| v.id == video_id)
            .map(|index| VideoForm::from_video(&self.videos[index], index))
    }

    /// Moves a video locally and renumbers every position from 1. Returns the
    /// moved video, or `None` when the move is a no-op.
    pub fn move_video(&mut self, from: usize, to: usize) -> Option<&Video> {
        let len = self.videos.len();
        if len < 2 {
            return None;
        }
        let from = from.min(len - 1);
        let to = to.min(len - 1);
        if from == to {
            return None;
        }
        let video = self.videos.remove(from);
        self.videos.insert(to, video);
        for (index, video) in self.videos.iter_mut().enumerate() {
            video.position = Some(index as u32 + 1);
        }
        self.videos.get(to)
    }

    /// Reorders locally, then persists the moved video's position. The local
    /// order stays even when the server call fails.
    pub async fn reorder(&mut self, hub: &StudieHub, from: usize, to: usize) -> Option<Notice> {
        let (id, position) = {
            let moved = self.move_video(from, to)?;
            (moved.id.clone(), moved.position.unwrap_or(1))
        };
        match hub.update_video_position(&id, position).await {
            Ok(_) => Some(Notice::success("Order updated")),
            Err(err) => {
                log::warn!("Error updating position of {}: {}", id, err);
                Some(Notice::error("Failed to update order"))
            }
        }
    }

    /// Creates a video, or updates `editing` when given, then reloads the list.
    pub async fn save(
        &mut self,
        hub: &StudieHub,
        form: &VideoForm,
        editing: Option<&str>,
    ) -> Result<Notice, StudieHubError> {
        let dto = form.to_dto(&self.course_id)?;
        let notice = match editing {
            Some(id) => {
                hub.update_video(id, &dto)
                    .await
                    .map_err(|e| e.or_message("Failed to update video"))?;
                Notice::success("Video updated successfully")
            }
            None => {
                hub.create_video(&dto)
                    .await
                    .map_err(|e| e.or_message("Failed to create video"))?;
                Notice::success("Video created successfully")
            }
        };
        self.refresh(hub).await?;
        Ok(notice)
    }

    pub async fn delete(&mut self, hub: &StudieHub, video_id: &str) -> Result<Notice, StudieHubError> {
        hub.delete_video(video_id)
            .await
            .map_err(|e| e.or_message("Error deleting video"))?;
        self.refresh(hub).await?;
        Ok(Notice::success("Video deleted successfully"))
    }

    async fn refresh(&mut self, hub: &StudieHub) -> Result<(), StudieHubError> {
        let mut videos = hub.get_course_videos(&self.course_id).await?;
        sort_videos(&mut videos);
        self.videos = videos;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, position: Option<u32>) -> Video {
        Video {
            id: id.into(),
            title: format!("Video {}", id),
            description: String::new(),
            course_id: "c1".into(),
            video_url: "https://youtu.be/dQw4w9WgXcQ".into(),
            position,
            drive_notes_file_link: None,
            drive_notes_file_name: None,
            drive_code_file_links: None,
            drive_code_file_names: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn ids(manager: &VideoManager) -> Vec<&str> {
        manager.videos().iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn new_video_goes_last() {
        let manager = VideoManager::new("c1", vec![video("a", Some(1)), video("b", Some(2))]);
        assert_eq!(manager.next_position(), 3);
        assert_eq!(manager.new_form().position, Some(3));
    }

    #[test]
    fn move_renumbers_every_position() {
        let mut manager = VideoManager::new(
            "c1",
            vec![video("a", Some(1)), video("b", Some(2)), video("c", Some(3))],
        );
        let moved = manager.move_video(0, 2).map(|v| (v.id.clone(), v.position));
        assert_eq!(moved, Some(("a".to_string(), Some(3))));
        assert_eq!(ids(&manager), vec!["b", "c", "a"]);
        let positions: Vec<_> = manager.videos().iter().map(|v| v.position).collect();
        assert_eq!(positions, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn move_is_noop_for_same_index_or_short_list() {
        let mut single = VideoManager::new("c1", vec![video("a", Some(5))]);
        assert!(single.move_video(0, 1).is_none());
        assert_eq!(single.videos()[0].position, Some(5));

        let mut manager = VideoManager::new("c1", vec![video("a", Some(1)), video("b", Some(2))]);
        assert!(manager.move_video(1, 1).is_none());
        assert_eq!(ids(&manager), vec!["a", "b"]);
    }

    #[test]
    fn code_rows_drop_blank_links_and_name_by_row() {
        let rows = vec![
            CodeFileRow { link: " https://drive/a ".into(), name: String::new() },
            CodeFileRow { link: "   ".into(), name: "ignored".into() },
            CodeFileRow { link: "https://drive/c".into(), name: " main.rs ".into() },
        ];
        let (links, names) = code_file_entries(&rows);
        assert_eq!(links, vec!["https://drive/a", "https://drive/c"]);
        assert_eq!(names, vec!["Code File 1", "main.rs"]);
    }

    #[test]
    fn edit_form_falls_back_to_list_position() {
        let mut unpositioned = video("b", None);
        unpositioned.drive_code_file_links = Some(vec!["https://drive/x".into()]);
        let manager = VideoManager::new("c1", vec![video("a", Some(1)), unpositioned]);
        let form = manager.edit_form("b").unwrap();
        assert_eq!(form.position, Some(2));
        assert_eq!(form.code_files.len(), 1);
        assert_eq!(form.code_files[0].name, "");
    }

    #[test]
    fn edit_form_treats_zero_position_as_unset() {
        let manager = VideoManager::new("c1", vec![video("a", Some(1)), video("b", Some(0))]);
        let form = manager.edit_form("a").unwrap();
        assert_eq!(form.position, Some(1));
        let zero_index = manager.videos().iter().position(|v| v.id == "b").unwrap();
        let form = manager.edit_form("b").unwrap();
        assert_eq!(form.position, Some(zero_index as u32 + 1));
    }

    #[test]
    fn form_rejects_non_youtube_url() {
        let form = VideoForm {
            title: "Intro".into(),
            video_url: "https://vimeo.com/1".into(),
            ..VideoForm::for_new(1)
        };
        let errors = form.to_dto("c1").unwrap_err();
        assert!(errors.has("videoUrl"));
    }
}
