// ==========================================
// QMS Retorno - Progresso da importação em lote
// ==========================================
// Responsabilidade: trait de notificação de progresso do lote
// Observação: o motor define o trait e a camada de apresentação
// implementa o adaptador (inversão de dependência)
// ==========================================

// ==========================================
// ImportProgressListener Trait
// ==========================================
/// Notificação de progresso de um lote de importação
///
/// O importador chama `on_progress` a cada 50 linhas processadas
/// (sucessos + erros somados) e uma vez na conclusão do lote.
/// Não existe cancelamento no meio do lote.
pub trait ImportProgressListener: Send + Sync {
    /// # Parâmetros
    /// - processed: linhas já processadas (sucesso + erro)
    /// - total: total de linhas do lote
    fn on_progress(&self, processed: usize, total: usize);
}

/// Implementação nula (padrão quando ninguém observa o progresso)
pub struct NoOpProgressListener;

impl ImportProgressListener for NoOpProgressListener {
    fn on_progress(&self, _processed: usize, _total: usize) {}
}

/// Adaptador que apenas loga o progresso (usado pelo binário CLI)
pub struct LogProgressListener;

impl ImportProgressListener for LogProgressListener {
    fn on_progress(&self, processed: usize, total: usize) {
        tracing::info!(processed, total, "progresso da importação");
    }
}
